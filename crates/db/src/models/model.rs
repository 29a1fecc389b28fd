//! ML model definition and DTOs.

use std::fmt;

use fair_core::status::ModelStatus;
use fair_core::types::{DbId, Timestamp};
use fair_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A model row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Model {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: DbId,
    pub dataset_id: DbId,
    #[sqlx(try_from = "i16")]
    pub status: ModelStatus,
    /// Id of the training run currently published for this model.
    pub published_training: Option<DbId>,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for creating a new model.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateModel {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(required)]
    pub created_by: Option<DbId>,
    #[validate(required)]
    pub dataset_id: Option<DbId>,
    /// Defaults to [`ModelStatus::Draft`] if omitted.
    pub status: Option<ModelStatus>,
}

/// DTO for updating an existing model. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateModel {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ModelStatus>,
    pub published_training: Option<DbId>,
}
