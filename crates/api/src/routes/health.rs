use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and PostGIS is installed.
    pub status: &'static str,
    pub version: &'static str,
    /// PostGIS version string, `null` when the database or extension is unavailable.
    pub postgis: Option<String>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let postgis = match fair_db::postgis_version(&state.pool).await {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::warn!(error = %e, "PostGIS health check failed");
            None
        }
    };

    Json(HealthResponse {
        status: if postgis.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        postgis,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
