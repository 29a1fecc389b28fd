pub mod aoi;
pub mod auth;
pub mod dataset;
pub mod feedback;
pub mod feedback_aoi;
pub mod feedback_label;
pub mod health;
pub mod label;
pub mod model;
pub mod training;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every resource path ends in a slash.
///
/// ```text
/// /auth/login/                                     OSM login URL
/// /user/{id}/                                      user profile
///
/// /dataset/, /dataset/{id}/                        datasets (?created_by=)
/// /aoi/, /aoi/{id}/                                AOIs (?dataset=)
/// /label/, /label/{id}/                            labels (?aoi=)
/// /model/, /model/{id}/                            models (?dataset=)
/// /training/, /training/{id}/                      training runs (?model=)
/// /feedback/, /feedback/{id}/                      feedback (?training=)
/// /feedback-aoi/, /feedback-aoi/{id}/              feedback AOIs (?training=)
/// /feedback-label/, /feedback-label/{id}/          feedback labels (?feedback_aoi=)
/// ```
///
/// List endpoints accept `?limit=&offset=`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(user::router())
        .merge(dataset::router())
        .merge(aoi::router())
        .merge(label::router())
        .merge(model::router())
        .merge(training::router())
        .merge(feedback::router())
        .merge(feedback_aoi::router())
        .merge(feedback_label::router())
}
