//! Feedback on a training run's predictions.

use std::fmt;

use fair_core::geometry::Polygon;
use fair_core::status::FeedbackType;
use fair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A feedback row from the `feedbacks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    /// Region the feedback applies to; may contain holes.
    #[sqlx(try_from = "String")]
    pub geom: Polygon,
    pub training_id: DbId,
    pub zoom_level: i32,
    #[sqlx(try_from = "String")]
    pub feedback_type: FeedbackType,
    pub comments: Option<String>,
    pub user_id: DbId,
    pub source_imagery: String,
    pub validated: bool,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
}

impl Feedback {
    /// Text view `"<user> - <training> - <feedback_type>"`.
    pub fn display_with<'a, U, T>(&'a self, user: &'a U, training: &'a T) -> FeedbackDisplay<'a, U, T>
    where
        U: fmt::Display,
        T: fmt::Display,
    {
        FeedbackDisplay {
            feedback: self,
            user,
            training,
        }
    }
}

pub struct FeedbackDisplay<'a, U, T> {
    feedback: &'a Feedback,
    user: &'a U,
    training: &'a T,
}

impl<U: fmt::Display, T: fmt::Display> fmt::Display for FeedbackDisplay<'_, U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.user, self.training, self.feedback.feedback_type
        )
    }
}

/// DTO for submitting feedback.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedback {
    #[validate(required)]
    pub user_id: Option<DbId>,
    #[validate(required)]
    pub training_id: Option<DbId>,
    pub geom: Polygon,
    /// Feedback is only collected on zoom 19 to 23 tiles.
    #[validate(range(min = 19, max = 23))]
    pub zoom_level: i32,
    /// Defaults to [`FeedbackType::TruePositive`] if omitted.
    pub feedback_type: Option<FeedbackType>,
    pub comments: Option<String>,
    #[validate(url)]
    pub source_imagery: String,
}

/// DTO for updating feedback. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeedback {
    pub geom: Option<Polygon>,
    pub feedback_type: Option<FeedbackType>,
    pub comments: Option<String>,
    pub validated: Option<bool>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::model::tests::sample_model;
    use crate::models::osm_user::tests::sample_user;
    use crate::models::training::tests::sample_training;

    fn holed_square() -> Polygon {
        Polygon::from_rings(vec![
            vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            vec![[0.4, 0.4], [0.4, 0.6], [0.6, 0.6], [0.6, 0.4], [0.4, 0.4]],
        ])
        .unwrap()
    }

    fn sample_feedback() -> Feedback {
        Feedback {
            id: 1,
            geom: holed_square(),
            training_id: 1,
            zoom_level: 19,
            feedback_type: FeedbackType::default(),
            comments: None,
            user_id: 1,
            source_imagery: "http://example.com/image.png".into(),
            validated: false,
            created_at: Utc::now(),
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn display_combines_user_training_and_type() {
        let user = sample_user("testuser", 123456789);
        let model = sample_model("Test Model");
        let training = sample_training(model.id);
        let feedback = sample_feedback();

        let training_view = training.display_with(&model);
        assert_eq!(
            feedback.display_with(&user, &training_view).to_string(),
            "testuser - Test Model - TP"
        );
    }

    #[test]
    fn display_reflects_feedback_type_change() {
        let user = sample_user("testuser", 123456789);
        let model = sample_model("Test Model");
        let training = sample_training(model.id);
        let mut feedback = sample_feedback();

        feedback.feedback_type = FeedbackType::FalsePositive;
        let training_view = training.display_with(&model);
        assert_eq!(
            feedback.display_with(&user, &training_view).to_string(),
            "testuser - Test Model - FP"
        );
    }

    #[test]
    fn create_rejects_zoom_outside_feedback_range() {
        let input = CreateFeedback {
            user_id: Some(1),
            training_id: Some(1),
            geom: holed_square(),
            zoom_level: 12,
            feedback_type: None,
            comments: None,
            source_imagery: "http://example.com/image.png".into(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("zoom_level"));
    }
}
