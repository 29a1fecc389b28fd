//! Feedback label model and DTOs.

use std::fmt;

use fair_core::geometry::Polygon;
use fair_core::types::{DbId, OsmId, Timestamp};
use fair_core::validation::validate_tags;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feedback_labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackLabel {
    pub id: DbId,
    pub osm_id: Option<OsmId>,
    pub feedback_aoi_id: DbId,
    pub tags: Option<serde_json::Value>,
    #[sqlx(try_from = "String")]
    pub geom: Polygon,
    pub created_at: Timestamp,
}

impl FeedbackLabel {
    /// Text view `"<osm_id> - <feedback_aoi> - <tags>"`. Missing values
    /// render as `null`; tags render as compact JSON.
    pub fn display_with<'a, A: fmt::Display>(
        &'a self,
        feedback_aoi: &'a A,
    ) -> FeedbackLabelDisplay<'a, A> {
        FeedbackLabelDisplay {
            label: self,
            feedback_aoi,
        }
    }
}

pub struct FeedbackLabelDisplay<'a, A> {
    label: &'a FeedbackLabel,
    feedback_aoi: &'a A,
}

impl<A: fmt::Display> fmt::Display for FeedbackLabelDisplay<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label.osm_id {
            Some(osm_id) => write!(f, "{osm_id}")?,
            None => f.write_str("null")?,
        }
        write!(f, " - {} - ", self.feedback_aoi)?;
        match &self.label.tags {
            Some(tags) => write!(f, "{tags}"),
            None => f.write_str("null"),
        }
    }
}

/// DTO for creating a feedback label.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackLabel {
    pub osm_id: Option<OsmId>,
    #[validate(required)]
    pub feedback_aoi_id: Option<DbId>,
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<serde_json::Value>,
    pub geom: Polygon,
}

/// DTO for updating a feedback label. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeedbackLabel {
    pub osm_id: Option<OsmId>,
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<serde_json::Value>,
    pub geom: Option<Polygon>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::feedback_aoi::tests::sample_feedback_aoi;

    const INNER: &str = "POLYGON((0.5 0.5, 0.5 1.5, 1.5 1.5, 1.5 0.5, 0.5 0.5))";

    fn sample_label() -> FeedbackLabel {
        FeedbackLabel {
            id: 1,
            osm_id: Some(123456789),
            feedback_aoi_id: 1,
            tags: Some(serde_json::json!({"natural": "tree"})),
            geom: Polygon::from_wkt(INNER).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn display_renders_osm_id_parent_and_tags() {
        let parent = "feedbacklabeluser - Feedback Label Model - http://example.com/x.png";
        assert_eq!(
            sample_label().display_with(&parent).to_string(),
            format!("123456789 - {parent} - {{\"natural\":\"tree\"}}")
        );
    }

    #[test]
    fn display_reflects_osm_id_and_tags_change() {
        let parent = "parent";
        let mut label = sample_label();

        label.osm_id = Some(987654321);
        label.tags = Some(serde_json::json!({"natural": "water"}));

        assert_eq!(
            label.display_with(&parent).to_string(),
            "987654321 - parent - {\"natural\":\"water\"}"
        );
    }

    #[test]
    fn display_ignores_geom() {
        let parent = sample_feedback_aoi("http://example.com/feedback_aoi_image.png");
        let mut label = sample_label();
        let before = label.display_with(&parent.source_imagery).to_string();

        label.geom = Polygon::from_wkt("POLYGON((0 0, 0 3, 3 3, 3 0, 0 0))").unwrap();
        assert_eq!(label.display_with(&parent.source_imagery).to_string(), before);
    }

    #[test]
    fn display_renders_missing_values_as_null() {
        let label = FeedbackLabel {
            osm_id: None,
            tags: None,
            ..sample_label()
        };
        assert_eq!(label.display_with(&"p").to_string(), "null - p - null");
    }
}
