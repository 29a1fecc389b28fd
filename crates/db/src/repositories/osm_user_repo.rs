//! Repository for the `osm_users` table.

use fair_core::types::{DbId, OsmId};
use sqlx::PgPool;

use crate::models::osm_user::{CreateOsmUser, OsmUser, UpdateOsmUser};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, username, password, osm_id, email, img_url, is_active, created_at, last_modified";

/// Provides CRUD operations for OSM users.
pub struct OsmUserRepo;

impl OsmUserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A missing password is stored as the unusable marker `!`. A missing
    /// `username` or `osm_id` is bound as NULL and rejected by the schema.
    pub async fn create(pool: &PgPool, input: &CreateOsmUser) -> Result<OsmUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO osm_users (username, password, osm_id, email, img_url)
             VALUES ($1, COALESCE($2, '!'), $3, COALESCE($4, ''), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OsmUser>(&query)
            .bind(&input.username)
            .bind(&input.password)
            .bind(input.osm_id)
            .bind(&input.email)
            .bind(&input.img_url)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OsmUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM osm_users WHERE id = $1");
        sqlx::query_as::<_, OsmUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by their OpenStreetMap account ID.
    pub async fn find_by_osm_id(
        pool: &PgPool,
        osm_id: OsmId,
    ) -> Result<Option<OsmUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM osm_users WHERE osm_id = $1");
        sqlx::query_as::<_, OsmUser>(&query)
            .bind(osm_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by exact username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<OsmUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM osm_users WHERE username = $1");
        sqlx::query_as::<_, OsmUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List users ordered by ID.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<OsmUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM osm_users ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, OsmUser>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOsmUser,
    ) -> Result<Option<OsmUser>, sqlx::Error> {
        let query = format!(
            "UPDATE osm_users SET
                username = COALESCE($2, username),
                password = COALESCE($3, password),
                osm_id = COALESCE($4, osm_id),
                email = COALESCE($5, email),
                img_url = COALESCE($6, img_url),
                is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OsmUser>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.password)
            .bind(input.osm_id)
            .bind(&input.email)
            .bind(&input.img_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
