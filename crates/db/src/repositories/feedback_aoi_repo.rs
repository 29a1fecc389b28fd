//! Repository for the `feedback_aois` table.

use fair_core::geometry::{Polygon, SRID};
use fair_core::status::DownloadStatus;
use fair_core::types::DbId;
use sqlx::PgPool;

use super::{require, OsmUserRepo, TrainingRepo};
use crate::models::feedback_aoi::{CreateFeedbackAoi, FeedbackAoi, UpdateFeedbackAoi};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, training_id, ST_AsText(geom) AS geom, label_status, label_fetched, \
    source_imagery, user_id, created_at, last_modified";

/// Provides CRUD operations for feedback AOIs.
pub struct FeedbackAoiRepo;

impl FeedbackAoiRepo {
    /// Insert a new feedback AOI, returning the created row.
    ///
    /// If `label_status` is `None`, defaults to [`DownloadStatus::NotDownloaded`].
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeedbackAoi,
    ) -> Result<FeedbackAoi, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback_aois (training_id, geom, label_status, source_imagery, user_id)
             VALUES ($1, ST_GeomFromText($2, {SRID}), $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackAoi>(&query)
            .bind(input.training_id)
            .bind(input.geom.to_wkt())
            .bind(input.label_status.unwrap_or_default().id())
            .bind(&input.source_imagery)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a feedback AOI by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FeedbackAoi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback_aois WHERE id = $1");
        sqlx::query_as::<_, FeedbackAoi>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List feedback AOIs ordered by ID, optionally restricted to one training run.
    pub async fn list(
        pool: &PgPool,
        training_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FeedbackAoi>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback_aois
             WHERE ($1::BIGINT IS NULL OR training_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, FeedbackAoi>(&query)
            .bind(training_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a feedback AOI. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedbackAoi,
    ) -> Result<Option<FeedbackAoi>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback_aois SET
                geom = COALESCE(ST_GeomFromText($2, {SRID}), geom),
                label_status = COALESCE($3, label_status),
                label_fetched = COALESCE($4, label_fetched),
                source_imagery = COALESCE($5, source_imagery),
                user_id = COALESCE($6, user_id),
                training_id = COALESCE($7, training_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackAoi>(&query)
            .bind(id)
            .bind(input.geom.as_ref().map(Polygon::to_wkt))
            .bind(input.label_status.map(DownloadStatus::id))
            .bind(input.label_fetched)
            .bind(&input.source_imagery)
            .bind(input.user_id)
            .bind(input.training_id)
            .fetch_optional(pool)
            .await
    }

    /// Render as `"<user> - <training> - <source_imagery>"` from current rows.
    pub async fn describe(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let Some(feedback_aoi) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let user = require(OsmUserRepo::find_by_id(pool, feedback_aoi.user_id).await?)?;
        let training = require(TrainingRepo::describe(pool, feedback_aoi.training_id).await?)?;
        Ok(Some(feedback_aoi.display_with(&user, &training).to_string()))
    }
}
