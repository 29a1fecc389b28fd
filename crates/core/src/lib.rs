//! Domain types shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds identifiers, the error
//! taxonomy, polygon geometry, closed enumerations and validation rules.

pub mod error;
pub mod geometry;
pub mod pagination;
pub mod status;
pub mod types;
pub mod validation;
