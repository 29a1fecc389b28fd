//! Route definitions for the `/dataset` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dataset;
use crate::state::AppState;

/// Datasets.
///
/// ```text
/// GET    /dataset/       -> list
/// POST   /dataset/       -> create
/// GET    /dataset/{id}/  -> get_by_id
/// PATCH  /dataset/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dataset/", get(dataset::list).post(dataset::create))
        .route("/dataset/{id}/", get(dataset::get_by_id).patch(dataset::update))
}
