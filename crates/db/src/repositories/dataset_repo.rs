//! Repository for the `datasets` table.

use fair_core::status::DatasetStatus;
use fair_core::types::DbId;
use sqlx::PgPool;

use crate::models::dataset::{CreateDataset, Dataset, UpdateDataset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_by, source_imagery, status, created_at, last_modified";

/// Provides CRUD operations for datasets.
pub struct DatasetRepo;

impl DatasetRepo {
    /// Insert a new dataset, returning the created row.
    ///
    /// If `status` is `None`, defaults to [`DatasetStatus::Active`].
    pub async fn create(pool: &PgPool, input: &CreateDataset) -> Result<Dataset, sqlx::Error> {
        let query = format!(
            "INSERT INTO datasets (name, created_by, source_imagery, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dataset>(&query)
            .bind(&input.name)
            .bind(input.created_by)
            .bind(&input.source_imagery)
            .bind(input.status.unwrap_or_default().id())
            .fetch_one(pool)
            .await
    }

    /// Find a dataset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dataset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM datasets WHERE id = $1");
        sqlx::query_as::<_, Dataset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List datasets ordered by most recently created first, optionally
    /// restricted to one owner.
    pub async fn list(
        pool: &PgPool,
        created_by: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Dataset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM datasets
             WHERE ($1::BIGINT IS NULL OR created_by = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Dataset>(&query)
            .bind(created_by)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a dataset. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDataset,
    ) -> Result<Option<Dataset>, sqlx::Error> {
        let query = format!(
            "UPDATE datasets SET
                name = COALESCE($2, name),
                source_imagery = COALESCE($3, source_imagery),
                status = COALESCE($4, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dataset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.source_imagery)
            .bind(input.status.map(DatasetStatus::id))
            .fetch_optional(pool)
            .await
    }
}
