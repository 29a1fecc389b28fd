//! Route definitions for the `/feedback-aoi` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback_aoi;
use crate::state::AppState;

/// Feedback AOIs.
///
/// ```text
/// GET    /feedback-aoi/       -> list
/// POST   /feedback-aoi/       -> create
/// GET    /feedback-aoi/{id}/  -> get_by_id
/// PATCH  /feedback-aoi/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedback-aoi/", get(feedback_aoi::list).post(feedback_aoi::create))
        .route("/feedback-aoi/{id}/", get(feedback_aoi::get_by_id).patch(feedback_aoi::update))
}
