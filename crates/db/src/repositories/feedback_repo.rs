//! Repository for the `feedbacks` table.

use fair_core::geometry::{Polygon, SRID};
use fair_core::types::DbId;
use sqlx::PgPool;

use super::{require, OsmUserRepo, TrainingRepo};
use crate::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, ST_AsText(geom) AS geom, training_id, zoom_level, feedback_type, \
    comments, user_id, source_imagery, validated, created_at, last_modified";

/// Provides CRUD operations for feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert new feedback, returning the created row.
    ///
    /// If `feedback_type` is `None`, defaults to `TP`.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedbacks
                (geom, training_id, zoom_level, feedback_type, comments, user_id, source_imagery)
             VALUES (ST_GeomFromText($1, {SRID}), $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.geom.to_wkt())
            .bind(input.training_id)
            .bind(input.zoom_level)
            .bind(input.feedback_type.unwrap_or_default().as_str())
            .bind(&input.comments)
            .bind(input.user_id)
            .bind(&input.source_imagery)
            .fetch_one(pool)
            .await
    }

    /// Find feedback by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedbacks WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List feedback ordered by ID, optionally restricted to one training run.
    pub async fn list(
        pool: &PgPool,
        training_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedbacks
             WHERE ($1::BIGINT IS NULL OR training_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(training_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update feedback. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedback,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedbacks SET
                geom = COALESCE(ST_GeomFromText($2, {SRID}), geom),
                feedback_type = COALESCE($3, feedback_type),
                comments = COALESCE($4, comments),
                validated = COALESCE($5, validated)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(input.geom.as_ref().map(Polygon::to_wkt))
            .bind(input.feedback_type.map(|t| t.as_str()))
            .bind(&input.comments)
            .bind(input.validated)
            .fetch_optional(pool)
            .await
    }

    /// Render as `"<user> - <training> - <feedback_type>"` from current rows.
    pub async fn describe(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let Some(feedback) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let user = require(OsmUserRepo::find_by_id(pool, feedback.user_id).await?)?;
        let training = require(TrainingRepo::describe(pool, feedback.training_id).await?)?;
        Ok(Some(feedback.display_with(&user, &training).to_string()))
    }
}
