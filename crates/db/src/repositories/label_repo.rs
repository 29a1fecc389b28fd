//! Repository for the `labels` table.

use fair_core::geometry::{Polygon, SRID};
use fair_core::types::DbId;
use sqlx::PgPool;

use super::{require, AoiRepo};
use crate::models::label::{CreateLabel, Label, UpdateLabel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, aoi_id, ST_AsText(geom) AS geom, osm_id, tags, created_at";

/// Provides CRUD operations for labels.
pub struct LabelRepo;

impl LabelRepo {
    /// Insert a new label, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLabel) -> Result<Label, sqlx::Error> {
        let query = format!(
            "INSERT INTO labels (aoi_id, geom, osm_id, tags)
             VALUES ($1, ST_GeomFromText($2, {SRID}), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Label>(&query)
            .bind(input.aoi_id)
            .bind(input.geom.to_wkt())
            .bind(input.osm_id)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find a label by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels WHERE id = $1");
        sqlx::query_as::<_, Label>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List labels ordered by ID, optionally restricted to one AOI.
    pub async fn list(
        pool: &PgPool,
        aoi_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Label>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM labels
             WHERE ($1::BIGINT IS NULL OR aoi_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Label>(&query)
            .bind(aoi_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a label. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLabel,
    ) -> Result<Option<Label>, sqlx::Error> {
        let query = format!(
            "UPDATE labels SET
                geom = COALESCE(ST_GeomFromText($2, {SRID}), geom),
                osm_id = COALESCE($3, osm_id),
                tags = COALESCE($4, tags)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Label>(&query)
            .bind(id)
            .bind(input.geom.as_ref().map(Polygon::to_wkt))
            .bind(input.osm_id)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Render the label as `"<aoi view> - <geom>"` from current rows.
    pub async fn describe(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let Some(label) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let aoi = require(AoiRepo::describe(pool, label.aoi_id).await?)?;
        Ok(Some(label.display_with(&aoi).to_string()))
    }
}
