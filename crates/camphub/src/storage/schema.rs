//! `SQLite` schema definitions for camphub.
//!
//! This module contains the SQL statements for creating the camp tables.

/// SQL statement to create the activities table.
pub const CREATE_ACTIVITIES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS activities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    difficulty INTEGER
)
";

/// SQL statement to create the campers table.
pub const CREATE_CAMPERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS campers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER
)
";

/// SQL statement to create the signups table.
///
/// Both foreign keys cascade, so removing a parent removes its signups even
/// outside the explicit delete paths in [`super::Storage`].
pub const CREATE_SIGNUPS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS signups (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    time INTEGER,
    camper_id INTEGER,
    activity_id INTEGER,
    CONSTRAINT fk_signups_camper_id_campers
        FOREIGN KEY (camper_id) REFERENCES campers(id) ON DELETE CASCADE,
    CONSTRAINT fk_signups_activity_id_activities
        FOREIGN KEY (activity_id) REFERENCES activities(id) ON DELETE CASCADE
)
";

/// SQL statement to index signups by camper.
pub const CREATE_SIGNUPS_CAMPER_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS ix_signups_camper_id ON signups(camper_id)
";

/// SQL statement to index signups by activity.
pub const CREATE_SIGNUPS_ACTIVITY_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups(activity_id)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_ACTIVITIES_TABLE,
    CREATE_CAMPERS_TABLE,
    CREATE_SIGNUPS_TABLE,
    CREATE_SIGNUPS_CAMPER_INDEX,
    CREATE_SIGNUPS_ACTIVITY_INDEX,
    CREATE_METADATA_TABLE,
];
