//! Area-of-interest model and DTOs.

use std::fmt;

use fair_core::geometry::Polygon;
use fair_core::status::DownloadStatus;
use fair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An AOI row from the `aois` table. `geom` is read through `ST_AsText`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Aoi {
    pub id: DbId,
    pub dataset_id: DbId,
    #[sqlx(try_from = "String")]
    pub geom: Polygon,
    #[sqlx(try_from = "i16")]
    pub label_status: DownloadStatus,
    /// When labels were last pulled from OSM; `None` until the first fetch.
    pub label_fetched: Option<Timestamp>,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
}

impl Aoi {
    /// Text view `"<dataset> - <geom>"`, rendered from current field values.
    pub fn display_with<'a, D: fmt::Display>(&'a self, dataset: &'a D) -> AoiDisplay<'a, D> {
        AoiDisplay { aoi: self, dataset }
    }
}

pub struct AoiDisplay<'a, D> {
    aoi: &'a Aoi,
    dataset: &'a D,
}

impl<D: fmt::Display> fmt::Display for AoiDisplay<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.dataset, self.aoi.geom)
    }
}

/// DTO for creating a new AOI.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAoi {
    #[validate(required)]
    pub dataset_id: Option<DbId>,
    pub geom: Polygon,
    /// Defaults to [`DownloadStatus::NotDownloaded`] if omitted.
    pub label_status: Option<DownloadStatus>,
}

/// DTO for updating an existing AOI. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAoi {
    pub geom: Option<Polygon>,
    pub label_status: Option<DownloadStatus>,
    pub label_fetched: Option<Timestamp>,
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::dataset::tests::sample_dataset;

    pub(crate) fn sample_aoi(wkt: &str) -> Aoi {
        Aoi {
            id: 1,
            dataset_id: 1,
            geom: Polygon::from_wkt(wkt).unwrap(),
            label_status: DownloadStatus::Downloaded,
            label_fetched: None,
            created_at: Utc::now(),
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn display_combines_dataset_and_geom() {
        let dataset = sample_dataset("Test Dataset");
        let aoi = sample_aoi("POLYGON((0 0, 0 1, 1 1, 1 0, 0 0))");
        assert_eq!(
            aoi.display_with(&dataset).to_string(),
            format!("Test Dataset - {}", aoi.geom)
        );
    }

    #[test]
    fn display_reflects_geom_change() {
        let dataset = sample_dataset("Test Dataset");
        let mut aoi = sample_aoi("POLYGON((0 0, 0 1, 1 1, 1 0, 0 0))");
        let before = aoi.display_with(&dataset).to_string();

        aoi.geom = Polygon::from_wkt("POLYGON((0 0, 0 2, 2 2, 2 0, 0 0))").unwrap();
        let after = aoi.display_with(&dataset).to_string();

        assert_ne!(before, after);
        assert_eq!(after, format!("Test Dataset - {}", aoi.geom));
    }

    #[test]
    fn create_without_dataset_is_invalid() {
        let input: CreateAoi = serde_json::from_value(serde_json::json!({
            "dataset_id": null,
            "geom": "POLYGON((0 0, 0 1, 1 1, 1 0, 0 0))"
        }))
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn create_rejects_non_polygon_geom() {
        let result: Result<CreateAoi, _> = serde_json::from_value(serde_json::json!({
            "dataset_id": 1,
            "geom": "POINT(0 0)"
        }));
        assert!(result.is_err());
    }
}
