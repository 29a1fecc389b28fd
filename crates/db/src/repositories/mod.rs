//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Geometry columns are
//! written with `ST_GeomFromText` and read back through `ST_AsText`.

pub mod aoi_repo;
pub mod dataset_repo;
pub mod feedback_aoi_repo;
pub mod feedback_label_repo;
pub mod feedback_repo;
pub mod label_repo;
pub mod model_repo;
pub mod osm_user_repo;
pub mod training_repo;

pub use aoi_repo::AoiRepo;
pub use dataset_repo::DatasetRepo;
pub use feedback_aoi_repo::FeedbackAoiRepo;
pub use feedback_label_repo::FeedbackLabelRepo;
pub use feedback_repo::FeedbackRepo;
pub use label_repo::LabelRepo;
pub use model_repo::ModelRepo;
pub use osm_user_repo::OsmUserRepo;
pub use training_repo::TrainingRepo;

/// Turn a missing parent row into `RowNotFound`. Foreign keys make this
/// unreachable for rows that were read back from the database.
pub(crate) fn require<T>(row: Option<T>) -> Result<T, sqlx::Error> {
    row.ok_or(sqlx::Error::RowNotFound)
}
