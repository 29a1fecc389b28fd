//! Training run model and DTOs.

use std::fmt;

use fair_core::types::{DbId, Timestamp};
use fair_core::validation::{validate_not_blank, validate_training_zoom_levels};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A training run row from the `trainings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Training {
    pub id: DbId,
    pub model_id: DbId,
    pub source_imagery: Option<String>,
    pub description: Option<String>,
    /// Free-form state label, `SUBMITTED` on creation.
    pub status: String,
    /// Identifier of the job executing this run, once one is assigned.
    pub task_id: Option<String>,
    pub zoom_level: Vec<i32>,
    pub created_by: DbId,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    pub accuracy: Option<f64>,
    pub epochs: i32,
    pub batch_size: i32,
    pub freeze_layers: bool,
    pub created_at: Timestamp,
}

impl Training {
    /// A training run is represented by its model's name.
    pub fn display_with<'a, M: fmt::Display>(&self, model: &'a M) -> TrainingDisplay<'a, M> {
        TrainingDisplay { model }
    }
}

pub struct TrainingDisplay<'a, M> {
    model: &'a M,
}

impl<M: fmt::Display> fmt::Display for TrainingDisplay<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model)
    }
}

/// DTO for submitting a new training run. Status always starts at `SUBMITTED`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTraining {
    #[validate(required)]
    pub model_id: Option<DbId>,
    #[validate(url)]
    pub source_imagery: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_training_zoom_levels"))]
    pub zoom_level: Vec<i32>,
    #[validate(required)]
    pub created_by: Option<DbId>,
    #[validate(range(min = 0))]
    pub epochs: i32,
    #[validate(range(min = 0))]
    pub batch_size: i32,
    pub freeze_layers: Option<bool>,
}

/// DTO for recording progress on a training run. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTraining {
    #[validate(custom(function = "validate_not_blank"))]
    pub status: Option<String>,
    pub task_id: Option<String>,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub accuracy: Option<f64>,
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::Utc;
    use fair_core::status::TRAINING_SUBMITTED;

    use super::*;
    use crate::models::model::tests::sample_model;

    pub(crate) fn sample_training(model_id: DbId) -> Training {
        Training {
            id: 1,
            model_id,
            source_imagery: None,
            description: None,
            status: TRAINING_SUBMITTED.to_string(),
            task_id: None,
            zoom_level: vec![19, 20, 21, 22],
            created_by: 1,
            started_at: None,
            finished_at: None,
            accuracy: None,
            epochs: 10,
            batch_size: 32,
            freeze_layers: false,
            created_at: Utc::now(),
        }
    }

    fn create_input() -> CreateTraining {
        CreateTraining {
            model_id: Some(1),
            source_imagery: None,
            description: None,
            zoom_level: vec![19, 20, 21, 22],
            created_by: Some(1),
            epochs: 10,
            batch_size: 32,
            freeze_layers: None,
        }
    }

    #[test]
    fn display_is_model_name() {
        let model = sample_model("Test Model");
        let training = sample_training(model.id);
        assert_eq!(training.display_with(&model).to_string(), "Test Model");
    }

    #[test]
    fn create_accepts_valid_input() {
        assert!(create_input().validate().is_ok());
    }

    #[test]
    fn create_rejects_missing_model_and_owner() {
        let input = CreateTraining {
            model_id: None,
            created_by: None,
            ..create_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("model_id"));
        assert!(errors.field_errors().contains_key("created_by"));
    }

    #[test]
    fn create_rejects_bad_hyperparameters() {
        let input = CreateTraining {
            zoom_level: vec![],
            epochs: -1,
            ..create_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("zoom_level"));
        assert!(errors.field_errors().contains_key("epochs"));
    }

    #[test]
    fn update_rejects_accuracy_out_of_range() {
        let input = UpdateTraining {
            accuracy: Some(120.0),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }
}
