//! Route definitions for the `/auth` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// GET /auth/login/  -> login_url
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login/", get(auth::login_url))
}
