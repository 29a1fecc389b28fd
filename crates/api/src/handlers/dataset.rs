//! Handlers for the `/dataset` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::dataset::{CreateDataset, Dataset, UpdateDataset};
use fair_db::repositories::DatasetRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{OwnerFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/dataset/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDataset>,
) -> AppResult<(StatusCode, Json<Dataset>)> {
    input.validate()?;
    let dataset = DatasetRepo::create(&state.pool, &input).await?;
    tracing::info!(dataset_id = dataset.id, created_by = dataset.created_by, "Dataset created");
    Ok((StatusCode::CREATED, Json(dataset)))
}

/// GET /api/v1/dataset/
///
/// Newest first. Filter by owner with `?created_by=`.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<OwnerFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<Dataset>>> {
    let datasets = DatasetRepo::list(
        &state.pool,
        filter.created_by,
        page.limit(),
        page.offset(),
    )
    .await?;
    Ok(Json(datasets))
}

/// GET /api/v1/dataset/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Dataset>> {
    let dataset = DatasetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dataset",
            id,
        }))?;
    Ok(Json(dataset))
}

/// PATCH /api/v1/dataset/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDataset>,
) -> AppResult<Json<Dataset>> {
    input.validate()?;
    let dataset = DatasetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dataset",
            id,
        }))?;
    Ok(Json(dataset))
}
