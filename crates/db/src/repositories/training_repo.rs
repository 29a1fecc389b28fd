//! Repository for the `trainings` table.

use fair_core::types::DbId;
use sqlx::PgPool;

use super::{require, ModelRepo};
use crate::models::training::{CreateTraining, Training, UpdateTraining};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, model_id, source_imagery, description, status, task_id, zoom_level, \
    created_by, started_at, finished_at, accuracy, epochs, batch_size, freeze_layers, created_at";

/// Provides CRUD operations for training runs.
pub struct TrainingRepo;

impl TrainingRepo {
    /// Insert a new training run. The row starts in the `SUBMITTED` state.
    pub async fn create(pool: &PgPool, input: &CreateTraining) -> Result<Training, sqlx::Error> {
        let query = format!(
            "INSERT INTO trainings
                (model_id, source_imagery, description, zoom_level, created_by,
                 epochs, batch_size, freeze_layers)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(input.model_id)
            .bind(&input.source_imagery)
            .bind(&input.description)
            .bind(&input.zoom_level)
            .bind(input.created_by)
            .bind(input.epochs)
            .bind(input.batch_size)
            .bind(input.freeze_layers)
            .fetch_one(pool)
            .await
    }

    /// Find a training run by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Training>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trainings WHERE id = $1");
        sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List training runs, newest first, optionally restricted to one model.
    pub async fn list(
        pool: &PgPool,
        model_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Training>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trainings
             WHERE ($1::BIGINT IS NULL OR model_id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(model_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Record progress on a training run. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTraining,
    ) -> Result<Option<Training>, sqlx::Error> {
        let query = format!(
            "UPDATE trainings SET
                status = COALESCE($2, status),
                task_id = COALESCE($3, task_id),
                started_at = COALESCE($4, started_at),
                finished_at = COALESCE($5, finished_at),
                accuracy = COALESCE($6, accuracy)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.task_id)
            .bind(input.started_at)
            .bind(input.finished_at)
            .bind(input.accuracy)
            .fetch_optional(pool)
            .await
    }

    /// Render the training run as its model's name.
    pub async fn describe(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let Some(training) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let model = require(ModelRepo::find_by_id(pool, training.model_id).await?)?;
        Ok(Some(training.display_with(&model).to_string()))
    }
}
