//! Repository for the `aois` table.

use fair_core::geometry::{Polygon, SRID};
use fair_core::status::DownloadStatus;
use fair_core::types::DbId;
use sqlx::PgPool;

use super::{require, DatasetRepo};
use crate::models::aoi::{Aoi, CreateAoi, UpdateAoi};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, dataset_id, ST_AsText(geom) AS geom, label_status, label_fetched, \
    created_at, last_modified";

/// Provides CRUD operations for AOIs.
pub struct AoiRepo;

impl AoiRepo {
    /// Insert a new AOI, returning the created row.
    ///
    /// If `label_status` is `None`, defaults to [`DownloadStatus::NotDownloaded`].
    pub async fn create(pool: &PgPool, input: &CreateAoi) -> Result<Aoi, sqlx::Error> {
        let query = format!(
            "INSERT INTO aois (dataset_id, geom, label_status)
             VALUES ($1, ST_GeomFromText($2, {SRID}), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Aoi>(&query)
            .bind(input.dataset_id)
            .bind(input.geom.to_wkt())
            .bind(input.label_status.unwrap_or_default().id())
            .fetch_one(pool)
            .await
    }

    /// Find an AOI by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Aoi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aois WHERE id = $1");
        sqlx::query_as::<_, Aoi>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List AOIs ordered by ID, optionally restricted to one dataset.
    pub async fn list(
        pool: &PgPool,
        dataset_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Aoi>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM aois
             WHERE ($1::BIGINT IS NULL OR dataset_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Aoi>(&query)
            .bind(dataset_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update an AOI. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAoi,
    ) -> Result<Option<Aoi>, sqlx::Error> {
        let query = format!(
            "UPDATE aois SET
                geom = COALESCE(ST_GeomFromText($2, {SRID}), geom),
                label_status = COALESCE($3, label_status),
                label_fetched = COALESCE($4, label_fetched)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Aoi>(&query)
            .bind(id)
            .bind(input.geom.as_ref().map(Polygon::to_wkt))
            .bind(input.label_status.map(DownloadStatus::id))
            .bind(input.label_fetched)
            .fetch_optional(pool)
            .await
    }

    /// Render the AOI as `"<dataset> - <geom>"` from current rows.
    pub async fn describe(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let Some(aoi) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let dataset = require(DatasetRepo::find_by_id(pool, aoi.dataset_id).await?)?;
        Ok(Some(aoi.display_with(&dataset).to_string()))
    }
}
