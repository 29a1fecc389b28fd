//! Label model and DTOs.

use std::fmt;

use fair_core::geometry::Polygon;
use fair_core::types::{DbId, OsmId, Timestamp};
use fair_core::validation::validate_tags;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A vector label row from the `labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Label {
    pub id: DbId,
    pub aoi_id: DbId,
    #[sqlx(try_from = "String")]
    pub geom: Polygon,
    pub osm_id: Option<OsmId>,
    /// OSM tags as a JSON object.
    pub tags: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

impl Label {
    /// Text view `"<aoi> - <geom>"`. Pass the AOI's own view as `aoi`.
    pub fn display_with<'a, A: fmt::Display>(&'a self, aoi: &'a A) -> LabelDisplay<'a, A> {
        LabelDisplay { label: self, aoi }
    }
}

pub struct LabelDisplay<'a, A> {
    label: &'a Label,
    aoi: &'a A,
}

impl<A: fmt::Display> fmt::Display for LabelDisplay<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.aoi, self.label.geom)
    }
}

/// DTO for creating a new label.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLabel {
    #[validate(required)]
    pub aoi_id: Option<DbId>,
    pub geom: Polygon,
    pub osm_id: Option<OsmId>,
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<serde_json::Value>,
}

/// DTO for updating an existing label. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLabel {
    pub geom: Option<Polygon>,
    pub osm_id: Option<OsmId>,
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::aoi::tests::sample_aoi;
    use crate::models::dataset::tests::sample_dataset;

    const SQUARE: &str = "POLYGON((0 0, 0 1, 1 1, 1 0, 0 0))";

    #[test]
    fn display_nests_aoi_view() {
        let dataset = sample_dataset("Test Dataset");
        let aoi = sample_aoi(SQUARE);
        let label = Label {
            id: 1,
            aoi_id: aoi.id,
            geom: Polygon::from_wkt(SQUARE).unwrap(),
            osm_id: Some(123456789),
            tags: Some(serde_json::json!({"key": "value"})),
            created_at: Utc::now(),
        };

        let aoi_view = aoi.display_with(&dataset);
        assert_eq!(
            label.display_with(&aoi_view).to_string(),
            format!("{aoi_view} - {}", label.geom)
        );
    }

    #[test]
    fn create_without_aoi_is_invalid() {
        let input = CreateLabel {
            aoi_id: None,
            geom: Polygon::from_wkt(SQUARE).unwrap(),
            osm_id: Some(123456789),
            tags: Some(serde_json::json!({"key": "value"})),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("aoi_id"));
    }

    #[test]
    fn create_rejects_non_object_tags() {
        let input = CreateLabel {
            aoi_id: Some(1),
            geom: Polygon::from_wkt(SQUARE).unwrap(),
            osm_id: None,
            tags: Some(serde_json::json!(["building"])),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("tags"));
    }
}
