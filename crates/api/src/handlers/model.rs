//! Handlers for the `/model` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::model::{CreateModel, Model, UpdateModel};
use fair_db::repositories::ModelRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{DatasetFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/model/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateModel>,
) -> AppResult<(StatusCode, Json<Model>)> {
    input.validate()?;
    let model = ModelRepo::create(&state.pool, &input).await?;
    tracing::info!(model_id = model.id, dataset_id = model.dataset_id, "Model created");
    Ok((StatusCode::CREATED, Json(model)))
}

/// GET /api/v1/model/
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<DatasetFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<Model>>> {
    let models = ModelRepo::list(&state.pool, filter.dataset, page.limit(), page.offset()).await?;
    Ok(Json(models))
}

/// GET /api/v1/model/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Model>> {
    let model = ModelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Model",
            id,
        }))?;
    Ok(Json(model))
}

/// PATCH /api/v1/model/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateModel>,
) -> AppResult<Json<Model>> {
    input.validate()?;
    let model = ModelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Model",
            id,
        }))?;
    Ok(Json(model))
}
