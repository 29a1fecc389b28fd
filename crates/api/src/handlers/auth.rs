//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::osm::{authorization_url, generate_state};
use crate::state::AppState;

/// Response body for `GET /auth/login/`.
#[derive(Debug, Serialize)]
pub struct LoginUrlResponse {
    pub login_url: String,
}

/// GET /api/v1/auth/login/
///
/// Return the OpenStreetMap authorization URL the frontend should send the
/// user to. Each call carries a fresh random `state`.
pub async fn login_url(State(state): State<AppState>) -> Json<LoginUrlResponse> {
    let url = authorization_url(&state.config.osm, &generate_state());
    tracing::debug!(osm = %state.config.osm.url, "Issued OSM login URL");

    Json(LoginUrlResponse {
        login_url: url.into(),
    })
}
