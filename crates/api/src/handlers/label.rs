//! Handlers for the `/label` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fair_core::error::CoreError;
use fair_core::types::DbId;
use fair_db::models::label::{CreateLabel, Label, UpdateLabel};
use fair_db::repositories::LabelRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{AoiFilter, PaginationParams};
use crate::state::AppState;

/// POST /api/v1/label/
///
/// `tags`, when present, must be a JSON object.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLabel>,
) -> AppResult<(StatusCode, Json<Label>)> {
    input.validate()?;
    let label = LabelRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(label)))
}

/// GET /api/v1/label/
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AoiFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<Label>>> {
    let labels = LabelRepo::list(&state.pool, filter.aoi, page.limit(), page.offset()).await?;
    Ok(Json(labels))
}

/// GET /api/v1/label/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Label>> {
    let label = LabelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Label",
            id,
        }))?;
    Ok(Json(label))
}

/// PATCH /api/v1/label/{id}/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLabel>,
) -> AppResult<Json<Label>> {
    input.validate()?;
    let label = LabelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Label",
            id,
        }))?;
    Ok(Json(label))
}
