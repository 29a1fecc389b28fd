//! Route definitions for the `/feedback` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Feedback on training predictions.
///
/// ```text
/// GET    /feedback/       -> list
/// POST   /feedback/       -> create
/// GET    /feedback/{id}/  -> get_by_id
/// PATCH  /feedback/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedback/", get(feedback::list).post(feedback::create))
        .route("/feedback/{id}/", get(feedback::get_by_id).patch(feedback::update))
}
