pub mod aoi;
pub mod auth;
pub mod dataset;
pub mod feedback;
pub mod feedback_aoi;
pub mod feedback_label;
pub mod label;
pub mod model;
pub mod training;
pub mod user;
