//! Route definitions for the `/label` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::label;
use crate::state::AppState;

/// OSM labels inside AOIs.
///
/// ```text
/// GET    /label/       -> list
/// POST   /label/       -> create
/// GET    /label/{id}/  -> get_by_id
/// PATCH  /label/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/label/", get(label::list).post(label::create))
        .route("/label/{id}/", get(label::get_by_id).patch(label::update))
}
