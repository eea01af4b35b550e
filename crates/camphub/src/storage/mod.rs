//! Storage layer for camphub.
//!
//! This module provides `SQLite`-based persistent storage for campers,
//! activities and the signups linking them.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Activity, Camper, NewActivity, NewCamper, NewSignup, Signup};

const SELECT_CAMPER: &str = "SELECT id, name, age FROM campers";
const SELECT_ACTIVITY: &str = "SELECT id, name, difficulty FROM activities";
const SELECT_SIGNUP: &str = "SELECT id, camper_id, activity_id, time FROM signups";

/// Storage engine for camp records.
///
/// Owns a single connection with foreign keys enabled. Parent deletes remove
/// their signups inside the same transaction.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;",
        )?;
        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // === Campers ===

    /// Insert a validated camper and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn insert_camper(&self, camper: &NewCamper) -> Result<Camper> {
        self.conn.execute(
            "INSERT INTO campers (name, age) VALUES (?1, ?2)",
            params![camper.name(), camper.age()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted camper with id {}", id);
        Ok(Camper::from_new(id, camper))
    }

    /// List all campers ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_campers(&self) -> Result<Vec<Camper>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_CAMPER} ORDER BY id"))?;
        let campers = stmt
            .query_map([], Self::row_to_camper)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(campers)
    }

    /// Get a camper by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_camper(&self, id: i64) -> Result<Option<Camper>> {
        let camper = self
            .conn
            .query_row(
                &format!("{SELECT_CAMPER} WHERE id = ?1"),
                [id],
                Self::row_to_camper,
            )
            .optional()?;
        Ok(camper)
    }

    /// Write a camper's name and age back to its row.
    ///
    /// Returns `false` if no camper with that id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn update_camper(&self, camper: &Camper) -> Result<bool> {
        let affected = self.conn.execute(
            "UPDATE campers SET name = ?1, age = ?2 WHERE id = ?3",
            params![camper.name(), camper.age(), camper.id()],
        )?;
        debug!("Updated camper {} ({} rows)", camper.id(), affected);
        Ok(affected > 0)
    }

    /// Delete a camper and all of its signups in one transaction.
    ///
    /// Returns `None` if the camper does not exist, otherwise the number of
    /// signups removed with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete_camper(&mut self, id: i64) -> Result<Option<usize>> {
        self.delete_with_signups("campers", "camper_id", id)
    }

    /// Get a camper's signups, each paired with its activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn camper_signups(&self, camper_id: i64) -> Result<Vec<(Signup, Activity)>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT s.id, s.camper_id, s.activity_id, s.time, a.id, a.name, a.difficulty
            FROM signups s JOIN activities a ON a.id = s.activity_id
            WHERE s.camper_id = ?1
            ORDER BY s.id
            ",
        )?;

        let rows = stmt
            .query_map([camper_id], |row| {
                let signup = Signup::from_row(row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?);
                let activity = Activity {
                    id: row.get(4)?,
                    name: row.get(5)?,
                    difficulty: row.get(6)?,
                };
                Ok((signup, activity))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    // === Activities ===

    /// Insert an activity and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn insert_activity(&self, activity: &NewActivity) -> Result<Activity> {
        self.conn.execute(
            "INSERT INTO activities (name, difficulty) VALUES (?1, ?2)",
            params![activity.name, activity.difficulty],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted activity with id {}", id);
        Ok(Activity {
            id,
            name: activity.name.clone(),
            difficulty: activity.difficulty,
        })
    }

    /// List all activities ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_activities(&self) -> Result<Vec<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_ACTIVITY} ORDER BY id"))?;
        let activities = stmt
            .query_map([], Self::row_to_activity)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(activities)
    }

    /// Get an activity by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_activity(&self, id: i64) -> Result<Option<Activity>> {
        let activity = self
            .conn
            .query_row(
                &format!("{SELECT_ACTIVITY} WHERE id = ?1"),
                [id],
                Self::row_to_activity,
            )
            .optional()?;
        Ok(activity)
    }

    /// Delete an activity and all of its signups in one transaction.
    ///
    /// Returns `None` if the activity does not exist, otherwise the number of
    /// signups removed with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete_activity(&mut self, id: i64) -> Result<Option<usize>> {
        self.delete_with_signups("activities", "activity_id", id)
    }

    // === Signups ===

    /// Insert a validated signup and return it with its assigned id.
    ///
    /// The referenced camper and activity must exist; the foreign key
    /// constraints reject the insert otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn insert_signup(&self, signup: &NewSignup) -> Result<Signup> {
        self.conn.execute(
            "INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3)",
            params![signup.time(), signup.camper_id(), signup.activity_id()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(
            "Inserted signup {} (camper {}, activity {})",
            id,
            signup.camper_id(),
            signup.activity_id()
        );
        Ok(Signup::from_new(id, signup))
    }

    /// Get a signup by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_signup(&self, id: i64) -> Result<Option<Signup>> {
        let signup = self
            .conn
            .query_row(
                &format!("{SELECT_SIGNUP} WHERE id = ?1"),
                [id],
                Self::row_to_signup,
            )
            .optional()?;
        Ok(signup)
    }

    // === Maintenance ===

    /// Run `f` inside one transaction, committing only if it succeeds.
    ///
    /// `f` must not start a transaction of its own.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, after rolling back, or an error if the
    /// transaction cannot be started or committed.
    pub fn with_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }

    /// Remove every camper, activity and signup. Call inside
    /// [`Storage::with_transaction`] to make it atomic.
    pub(crate) fn delete_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM signups", [])?;
        self.conn.execute("DELETE FROM campers", [])?;
        self.conn.execute("DELETE FROM activities", [])?;
        info!("Cleared all camp records");
        Ok(())
    }

    /// Get database statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StorageStats> {
        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StorageStats {
            campers: self.count_rows("campers")?,
            activities: self.count_rows("activities")?,
            signups: self.count_rows("signups")?,
            db_size_bytes,
        })
    }

    fn count_rows(&self, table: &'static str) -> Result<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete a parent row and the signups referencing it.
    fn delete_with_signups(
        &mut self,
        table: &'static str,
        fk_column: &'static str,
        id: i64,
    ) -> Result<Option<usize>> {
        let tx = self.conn.transaction()?;

        let exists = tx
            .query_row(
                &format!("SELECT 1 FROM {table} WHERE id = ?1"),
                [id],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let signups = tx.execute(
            &format!("DELETE FROM signups WHERE {fk_column} = ?1"),
            [id],
        )?;
        tx.execute(&format!("DELETE FROM {table} WHERE id = ?1"), [id])?;
        tx.commit()?;

        debug!("Deleted {} row {} with {} signups", table, id, signups);
        Ok(Some(signups))
    }

    fn row_to_camper(row: &rusqlite::Row) -> rusqlite::Result<Camper> {
        Ok(Camper::from_row(row.get(0)?, row.get(1)?, row.get(2)?))
    }

    fn row_to_activity(row: &rusqlite::Row) -> rusqlite::Result<Activity> {
        Ok(Activity {
            id: row.get(0)?,
            name: row.get(1)?,
            difficulty: row.get(2)?,
        })
    }

    fn row_to_signup(row: &rusqlite::Row) -> rusqlite::Result<Signup> {
        Ok(Signup::from_row(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
        ))
    }
}

/// Statistics about the storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
    /// Number of campers stored.
    pub campers: i64,
    /// Number of activities stored.
    pub activities: i64,
    /// Number of signups stored.
    pub signups: i64,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
