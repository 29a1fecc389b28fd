use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// GET /user/{id}/  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/user/{id}/", get(user::get_by_id))
}
