use axum::extract::State;
use axum::response::Html;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /
///
/// The submission form inside the page shell.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = state
        .pages
        .render_index_now()
        .map_err(|e| AppError::InternalError(format!("Failed to render page: {e}")))?;
    Ok(Html(html))
}
