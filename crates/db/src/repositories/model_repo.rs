//! Repository for the `models` table.

use fair_core::status::ModelStatus;
use fair_core::types::DbId;
use sqlx::PgPool;

use crate::models::model::{CreateModel, Model, UpdateModel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_by, dataset_id, status, \
    published_training, created_at, last_modified";

/// Provides CRUD operations for models.
pub struct ModelRepo;

impl ModelRepo {
    /// Insert a new model, returning the created row.
    ///
    /// If `status` is `None`, defaults to [`ModelStatus::Draft`].
    pub async fn create(pool: &PgPool, input: &CreateModel) -> Result<Model, sqlx::Error> {
        let query = format!(
            "INSERT INTO models (name, description, created_by, dataset_id, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.created_by)
            .bind(input.dataset_id)
            .bind(input.status.unwrap_or_default().id())
            .fetch_one(pool)
            .await
    }

    /// Find a model by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List models, newest first, optionally restricted to one dataset.
    pub async fn list(
        pool: &PgPool,
        dataset_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Model>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM models
             WHERE ($1::BIGINT IS NULL OR dataset_id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(dataset_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a model. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateModel,
    ) -> Result<Option<Model>, sqlx::Error> {
        let query = format!(
            "UPDATE models SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                published_training = COALESCE($5, published_training)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.map(ModelStatus::id))
            .bind(input.published_training)
            .fetch_optional(pool)
            .await
    }
}
