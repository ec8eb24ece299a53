//! Route definitions for the `/reimbursements` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::reimbursement;
use crate::state::AppState;

/// Routes mounted at `/reimbursements`.
///
/// ```text
/// POST   /                              -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reimbursement::create))
}
