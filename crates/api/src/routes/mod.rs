pub mod health;
pub mod reimbursement;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reimbursements                                  submit (POST, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/reimbursements", reimbursement::router())
}
