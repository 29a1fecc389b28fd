//! Handlers for the `/feedback-label` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::feedback_label::{CreateFeedbackLabel, FeedbackLabel, UpdateFeedbackLabel};
use fair_db::repositories::FeedbackLabelRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{FeedbackAoiFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/feedback-label/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedbackLabel>,
) -> AppResult<(StatusCode, Json<FeedbackLabel>)> {
    input.validate()?;
    let label = FeedbackLabelRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(label)))
}

/// GET /api/v1/feedback-label/
///
/// Filter by feedback AOI with `?feedback_aoi=`.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<FeedbackAoiFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<FeedbackLabel>>> {
    let labels = FeedbackLabelRepo::list(
        &state.pool,
        filter.feedback_aoi,
        page.limit(),
        page.offset(),
    )
    .await?;
    Ok(Json(labels))
}

/// GET /api/v1/feedback-label/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FeedbackLabel>> {
    let label = FeedbackLabelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedbackLabel",
            id,
        }))?;
    Ok(Json(label))
}

/// PATCH /api/v1/feedback-label/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedbackLabel>,
) -> AppResult<Json<FeedbackLabel>> {
    input.validate()?;
    let label = FeedbackLabelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedbackLabel",
            id,
        }))?;
    Ok(Json(label))
}
