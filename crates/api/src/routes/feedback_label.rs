//! Route definitions for the `/feedback-label` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback_label;
use crate::state::AppState;

/// Feedback labels.
///
/// ```text
/// GET    /feedback-label/       -> list
/// POST   /feedback-label/       -> create
/// GET    /feedback-label/{id}/  -> get_by_id
/// PATCH  /feedback-label/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedback-label/", get(feedback_label::list).post(feedback_label::create))
        .route(
            "/feedback-label/{id}/",
            get(feedback_label::get_by_id).patch(feedback_label::update),
        )
}
