//! Handlers for the `/training` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::training::{CreateTraining, Training, UpdateTraining};
use fair_db::repositories::TrainingRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{ModelFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/training/
///
/// New runs always start in the `SUBMITTED` state.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTraining>,
) -> AppResult<(StatusCode, Json<Training>)> {
    input.validate()?;
    let training = TrainingRepo::create(&state.pool, &input).await?;
    tracing::info!(
        training_id = training.id,
        model_id = training.model_id,
        zoom_levels = ?training.zoom_level,
        "Training submitted",
    );
    Ok((StatusCode::CREATED, Json(training)))
}

/// GET /api/v1/training/
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ModelFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<Training>>> {
    let trainings = TrainingRepo::list(
        &state.pool,
        filter.model,
        page.limit(),
        page.offset(),
    )
    .await?;
    Ok(Json(trainings))
}

/// GET /api/v1/training/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Training>> {
    let training = TrainingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Training",
            id,
        }))?;
    Ok(Json(training))
}

/// PATCH /api/v1/training/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTraining>,
) -> AppResult<Json<Training>> {
    input.validate()?;
    let training = TrainingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Training",
            id,
        }))?;
    Ok(Json(training))
}
