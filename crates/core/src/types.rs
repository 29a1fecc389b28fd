/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// OpenStreetMap element and user identifiers are 64-bit.
pub type OsmId = i64;
