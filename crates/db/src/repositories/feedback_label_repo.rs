//! Repository for the `feedback_labels` table.

use fair_core::geometry::{Polygon, SRID};
use fair_core::types::DbId;
use sqlx::PgPool;

use super::{require, FeedbackAoiRepo};
use crate::models::feedback_label::{CreateFeedbackLabel, FeedbackLabel, UpdateFeedbackLabel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, osm_id, feedback_aoi_id, tags, ST_AsText(geom) AS geom, created_at";

/// Provides CRUD operations for feedback labels.
pub struct FeedbackLabelRepo;

impl FeedbackLabelRepo {
    /// Insert a new feedback label, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeedbackLabel,
    ) -> Result<FeedbackLabel, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback_labels (osm_id, feedback_aoi_id, tags, geom)
             VALUES ($1, $2, $3, ST_GeomFromText($4, {SRID}))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackLabel>(&query)
            .bind(input.osm_id)
            .bind(input.feedback_aoi_id)
            .bind(&input.tags)
            .bind(input.geom.to_wkt())
            .fetch_one(pool)
            .await
    }

    /// Find a feedback label by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FeedbackLabel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback_labels WHERE id = $1");
        sqlx::query_as::<_, FeedbackLabel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List feedback labels ordered by ID, optionally restricted to one feedback AOI.
    pub async fn list(
        pool: &PgPool,
        feedback_aoi_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FeedbackLabel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback_labels
             WHERE ($1::BIGINT IS NULL OR feedback_aoi_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, FeedbackLabel>(&query)
            .bind(feedback_aoi_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a feedback label. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedbackLabel,
    ) -> Result<Option<FeedbackLabel>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback_labels SET
                osm_id = COALESCE($2, osm_id),
                tags = COALESCE($3, tags),
                geom = COALESCE(ST_GeomFromText($4, {SRID}), geom)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackLabel>(&query)
            .bind(id)
            .bind(input.osm_id)
            .bind(&input.tags)
            .bind(input.geom.as_ref().map(Polygon::to_wkt))
            .fetch_optional(pool)
            .await
    }

    /// Render as `"<osm_id> - <feedback aoi view> - <tags>"` from current rows.
    pub async fn describe(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let Some(label) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let feedback_aoi = require(FeedbackAoiRepo::describe(pool, label.feedback_aoi_id).await?)?;
        Ok(Some(label.display_with(&feedback_aoi).to_string()))
    }
}
