//! Feedback AOI model and DTOs.

use std::fmt;

use fair_core::geometry::Polygon;
use fair_core::status::DownloadStatus;
use fair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feedback_aois` table: a region a user wants relabelled
/// for a given training run.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackAoi {
    pub id: DbId,
    pub training_id: DbId,
    #[sqlx(try_from = "String")]
    pub geom: Polygon,
    #[sqlx(try_from = "i16")]
    pub label_status: DownloadStatus,
    pub label_fetched: Option<Timestamp>,
    pub source_imagery: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
}

impl FeedbackAoi {
    /// Text view `"<user> - <training> - <source_imagery>"`.
    pub fn display_with<'a, U, T>(
        &'a self,
        user: &'a U,
        training: &'a T,
    ) -> FeedbackAoiDisplay<'a, U, T>
    where
        U: fmt::Display,
        T: fmt::Display,
    {
        FeedbackAoiDisplay {
            feedback_aoi: self,
            user,
            training,
        }
    }
}

pub struct FeedbackAoiDisplay<'a, U, T> {
    feedback_aoi: &'a FeedbackAoi,
    user: &'a U,
    training: &'a T,
}

impl<U: fmt::Display, T: fmt::Display> fmt::Display for FeedbackAoiDisplay<'_, U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.user, self.training, self.feedback_aoi.source_imagery
        )
    }
}

/// DTO for creating a feedback AOI.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackAoi {
    #[validate(required)]
    pub user_id: Option<DbId>,
    #[validate(required)]
    pub training_id: Option<DbId>,
    #[validate(url)]
    pub source_imagery: String,
    pub geom: Polygon,
    pub label_status: Option<DownloadStatus>,
}

/// DTO for updating a feedback AOI. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeedbackAoi {
    pub user_id: Option<DbId>,
    pub training_id: Option<DbId>,
    #[validate(url)]
    pub source_imagery: Option<String>,
    pub geom: Option<Polygon>,
    pub label_status: Option<DownloadStatus>,
    pub label_fetched: Option<Timestamp>,
}
