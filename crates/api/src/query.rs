//! Shared query parameter types for API handlers.
//!
//! List endpoints take [`PaginationParams`] plus one of the filter structs
//! as two separate `Query` extractors.

use fair_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use fair_core::types::DbId;
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Requested page size clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset)
    }
}

/// `?created_by=` filter for datasets.
#[derive(Debug, Deserialize)]
pub struct OwnerFilter {
    pub created_by: Option<DbId>,
}

/// `?dataset=` filter for AOIs and models.
#[derive(Debug, Deserialize)]
pub struct DatasetFilter {
    pub dataset: Option<DbId>,
}

/// `?aoi=` filter for labels.
#[derive(Debug, Deserialize)]
pub struct AoiFilter {
    pub aoi: Option<DbId>,
}

/// `?model=` filter for training runs.
#[derive(Debug, Deserialize)]
pub struct ModelFilter {
    pub model: Option<DbId>,
}

/// `?training=` filter for feedback and feedback AOIs.
#[derive(Debug, Deserialize)]
pub struct TrainingFilter {
    pub training: Option<DbId>,
}

/// `?feedback_aoi=` filter for feedback labels.
#[derive(Debug, Deserialize)]
pub struct FeedbackAoiFilter {
    pub feedback_aoi: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), DEFAULT_PAGE_LIMIT);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn pagination_clamps_out_of_range_values() {
        let params = PaginationParams {
            limit: Some(1_000),
            offset: Some(-5),
        };
        assert_eq!(params.limit(), MAX_PAGE_LIMIT);
        assert_eq!(params.offset(), 0);
    }
}
