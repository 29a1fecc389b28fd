//! Handlers for the `/aoi` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::aoi::{CreateAoi, Aoi, UpdateAoi};
use fair_db::repositories::AoiRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{DatasetFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/aoi/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAoi>,
) -> AppResult<(StatusCode, Json<Aoi>)> {
    input.validate()?;
    let aoi = AoiRepo::create(&state.pool, &input).await?;
    tracing::info!(aoi_id = aoi.id, dataset_id = aoi.dataset_id, "AOI created");
    Ok((StatusCode::CREATED, Json(aoi)))
}

/// GET /api/v1/aoi/
///
/// Filter by owning dataset with `?dataset=`.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<DatasetFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<Aoi>>> {
    let aois = AoiRepo::list(&state.pool, filter.dataset, page.limit(), page.offset()).await?;
    Ok(Json(aois))
}

/// GET /api/v1/aoi/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Aoi>> {
    let aoi = AoiRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Aoi",
            id,
        }))?;
    Ok(Json(aoi))
}

/// PATCH /api/v1/aoi/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAoi>,
) -> AppResult<Json<Aoi>> {
    input.validate()?;
    let aoi = AoiRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Aoi",
            id,
        }))?;
    Ok(Json(aoi))
}
