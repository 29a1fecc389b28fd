//! Dataset model and DTOs.

use std::fmt;

use fair_core::status::DatasetStatus;
use fair_core::types::{DbId, Timestamp};
use fair_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A dataset row from the `datasets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dataset {
    pub id: DbId,
    pub name: String,
    pub created_by: DbId,
    pub source_imagery: Option<String>,
    #[sqlx(try_from = "i16")]
    pub status: DatasetStatus,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for creating a new dataset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDataset {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(required)]
    pub created_by: Option<DbId>,
    #[validate(url)]
    pub source_imagery: Option<String>,
    /// Defaults to [`DatasetStatus::Active`] if omitted.
    pub status: Option<DatasetStatus>,
}

/// DTO for updating an existing dataset. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDataset {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[validate(url)]
    pub source_imagery: Option<String>,
    pub status: Option<DatasetStatus>,
}
