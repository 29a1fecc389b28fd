//! Handlers for the `/user` resource.

use axum::extract::{Path, State};
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::osm_user::OsmUserResponse;
use fair_db::repositories::OsmUserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/user/{id}/
///
/// Public profile of an OSM user. The stored credential is never returned.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OsmUserResponse>> {
    let user = OsmUserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OsmUser",
            id,
        }))?;
    Ok(Json(user.into()))
}
