//! Route definitions for the `/model` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::model;
use crate::state::AppState;

/// Model definitions.
///
/// ```text
/// GET    /model/       -> list
/// POST   /model/       -> create
/// GET    /model/{id}/  -> get_by_id
/// PATCH  /model/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/model/", get(model::list).post(model::create))
        .route("/model/{id}/", get(model::get_by_id).patch(model::update))
}
