//! Route definitions for the `/aoi` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::aoi;
use crate::state::AppState;

/// Areas of interest.
///
/// ```text
/// GET    /aoi/       -> list
/// POST   /aoi/       -> create
/// GET    /aoi/{id}/  -> get_by_id
/// PATCH  /aoi/{id}/  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/aoi/", get(aoi::list).post(aoi::create))
        .route("/aoi/{id}/", get(aoi::get_by_id).patch(aoi::update))
}
