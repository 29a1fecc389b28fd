//! Route definitions for the `/training` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::training;
use crate::state::AppState;

/// Training runs.
///
/// ```text
/// GET    /training/       -> list
/// POST   /training/       -> create
/// GET    /training/{id}/  -> get_by_id
/// PATCH  /training/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/training/", get(training::list).post(training::create))
        .route("/training/{id}/", get(training::get_by_id).patch(training::update))
}
