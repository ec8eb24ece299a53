use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health of the service and the two things a submission needs.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when submissions can be stored, otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    /// The database answers `SELECT 1`.
    pub db_healthy: bool,
    /// The upload directory exists and accepts new files.
    pub storage_healthy: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (db, storage_healthy) = tokio::join!(
        reimburse_db::health_check(&state.pool),
        state.store.is_writable()
    );
    let db_healthy = db.is_ok();

    if !(db_healthy && storage_healthy) {
        tracing::warn!(db_healthy, storage_healthy, "Health check degraded");
    }

    Json(HealthResponse {
        status: if db_healthy && storage_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        storage_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
