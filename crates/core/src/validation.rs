//! Field-level rules used by the `#[derive(Validate)]` create/update DTOs.
//!
//! Each function has the signature `validator` expects for
//! `#[validate(custom(function = "..."))]`.

use std::borrow::Cow;

use validator::ValidationError;

/// Lowest zoom level a training run may request.
pub const MIN_TRAINING_ZOOM: i32 = 0;
/// Highest zoom level imagery is served at.
pub const MAX_ZOOM: i32 = 23;
/// Feedback is only collected on high-resolution tiles.
pub const MIN_FEEDBACK_ZOOM: i32 = 19;

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

/// Tags must be a JSON object (`{"building": "yes"}`), never a scalar or list.
pub fn validate_tags(tags: &serde_json::Value) -> Result<(), ValidationError> {
    if tags.is_object() {
        Ok(())
    } else {
        Err(error("tags_not_object", "tags must be a JSON object".into()))
    }
}

/// A training run needs at least one zoom level, each within tile range.
pub fn validate_training_zoom_levels(levels: &[i32]) -> Result<(), ValidationError> {
    if levels.is_empty() {
        return Err(error(
            "zoom_level_empty",
            "at least one zoom level is required".into(),
        ));
    }
    match levels
        .iter()
        .find(|z| !(MIN_TRAINING_ZOOM..=MAX_ZOOM).contains(*z))
    {
        Some(z) => Err(error(
            "zoom_level_out_of_range",
            format!("zoom level {z} must be between {MIN_TRAINING_ZOOM} and {MAX_ZOOM}"),
        )),
        None => Ok(()),
    }
}

/// Reject blank strings that survive `length(min = 1)` (e.g. `"   "`).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error("blank", "value must not be blank".into()))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
