//! Handlers for the `/feedback-aoi` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::feedback_aoi::{CreateFeedbackAoi, FeedbackAoi, UpdateFeedbackAoi};
use fair_db::repositories::FeedbackAoiRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{TrainingFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/feedback-aoi/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedbackAoi>,
) -> AppResult<(StatusCode, Json<FeedbackAoi>)> {
    input.validate()?;
    let feedback_aoi = FeedbackAoiRepo::create(&state.pool, &input).await?;
    tracing::info!(
        feedback_aoi_id = feedback_aoi.id,
        training_id = feedback_aoi.training_id,
        "Feedback AOI created",
    );
    Ok((StatusCode::CREATED, Json(feedback_aoi)))
}

/// GET /api/v1/feedback-aoi/
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TrainingFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<FeedbackAoi>>> {
    let feedback_aois = FeedbackAoiRepo::list(
        &state.pool,
        filter.training,
        page.limit(),
        page.offset(),
    )
    .await?;
    Ok(Json(feedback_aois))
}

/// GET /api/v1/feedback-aoi/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FeedbackAoi>> {
    let feedback_aoi = FeedbackAoiRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedbackAoi",
            id,
        }))?;
    Ok(Json(feedback_aoi))
}

/// PATCH /api/v1/feedback-aoi/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedbackAoi>,
) -> AppResult<Json<FeedbackAoi>> {
    input.validate()?;
    let feedback_aoi = FeedbackAoiRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedbackAoi",
            id,
        }))?;
    Ok(Json(feedback_aoi))
}
