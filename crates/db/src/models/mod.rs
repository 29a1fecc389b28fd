//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - The entity's derived text representation (`Display`, or a borrowed
//!   view when the text involves related rows)

pub mod aoi;
pub mod dataset;
pub mod feedback;
pub mod feedback_aoi;
pub mod feedback_label;
pub mod label;
pub mod model;
pub mod osm_user;
pub mod training;
