use std::sync::Arc;

use crate::config::ServerConfig;
use crate::pages::PageRenderer;
use crate::storage::ReceiptStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: reimburse_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Local directory holding uploaded receipts.
    pub store: Arc<ReceiptStore>,
    /// Compiled page templates.
    pub pages: Arc<PageRenderer>,
}
