//! Handlers for the `/feedback` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};
use fair_db::repositories::FeedbackRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{TrainingFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/feedback/
///
/// `zoom_level` must be between 19 and 23.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    input.validate()?;
    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    tracing::info!(
        feedback_id = feedback.id,
        training_id = feedback.training_id,
        feedback_type = %feedback.feedback_type,
        "Feedback recorded",
    );
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/v1/feedback/
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TrainingFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list(
        &state.pool,
        filter.training,
        page.limit(),
        page.offset(),
    )
    .await?;
    Ok(Json(feedback))
}

/// GET /api/v1/feedback/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    Ok(Json(feedback))
}

/// PATCH /api/v1/feedback/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedback>,
) -> AppResult<Json<Feedback>> {
    input.validate()?;
    let feedback = FeedbackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    Ok(Json(feedback))
}
