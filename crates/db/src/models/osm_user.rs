//! OpenStreetMap user model and DTOs.

use std::fmt;

use fair_core::types::{DbId, OsmId, Timestamp};
use fair_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full user row from the `osm_users` table.
///
/// Contains the stored credential -- never serialize this to API responses
/// directly. Use [`OsmUserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct OsmUser {
    pub id: DbId,
    pub username: String,
    pub password: String,
    pub osm_id: OsmId,
    pub email: String,
    pub img_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
}

/// A user is represented by its username alone.
impl fmt::Display for OsmUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// Safe user representation for API responses (no credential).
#[derive(Debug, Clone, Serialize)]
pub struct OsmUserResponse {
    pub id: DbId,
    pub username: String,
    pub osm_id: OsmId,
    pub img_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<OsmUser> for OsmUserResponse {
    fn from(user: OsmUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            osm_id: user.osm_id,
            img_url: user.img_url,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
///
/// `username` and `osm_id` are optional only so that their absence is
/// reported by [`Validate::validate`] rather than by serde.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateOsmUser {
    #[validate(required, length(min = 1, max = 150), custom(function = "validate_not_blank"))]
    pub username: Option<String>,
    /// Stored as-is. OAuth-only accounts leave this empty and get `!`.
    pub password: Option<String>,
    #[validate(required)]
    pub osm_id: Option<OsmId>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(url)]
    pub img_url: Option<String>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOsmUser {
    #[validate(length(min = 1, max = 150), custom(function = "validate_not_blank"))]
    pub username: Option<String>,
    pub password: Option<String>,
    pub osm_id: Option<OsmId>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(url)]
    pub img_url: Option<String>,
    pub is_active: Option<bool>,
}
