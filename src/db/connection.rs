use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::StoreError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Version stamped into `PRAGMA user_version` once the schema is applied.
pub const SCHEMA_VERSION: i64 = 1;

/// A single SQLite connection shared by every thread of the process.
///
/// Access is serialized through a mutex, so writes coming from the write
/// executor never interleave with reads issued elsewhere.
pub struct Database {
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens (or creates) the file at `path` and brings its schema to
    /// [`SCHEMA_VERSION`].
    ///
    /// The returned flag is `true` when the file had no schema yet, i.e. this
    /// call created the database.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, bool), StoreError> {
        let path = path.into();
        let mut conn = Connection::open(&path)
            .map_err(|e| StoreError::Open(format!("{}: {e}", path.display())))?;
        conn.busy_timeout(Duration::from_secs(5))?;

        let version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
        debug!(path = %path.display(), version, "opened sqlite file");

        let created = match version {
            0 => {
                apply_schema(&mut conn)?;
                info!(path = %path.display(), "created estate database");
                true
            }
            SCHEMA_VERSION => false,
            found => {
                return Err(StoreError::SchemaVersion {
                    found,
                    supported: SCHEMA_VERSION,
                })
            }
        };

        Ok((
            Self {
                path,
                conn: Mutex::new(conn),
            },
            created,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Provides the locked connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        let mut conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut conn)
    }
}

fn apply_schema(conn: &mut Connection) -> Result<(), StoreError> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)
        .map_err(|e| StoreError::Db(format!("Failed to apply schema: {e}")))?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_open_creates_and_second_does_not() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estates.db");

        let (db, created) = Database::open(&path).unwrap();
        assert!(created);
        let version: i64 = db
            .with_conn(|conn| {
                Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
            })
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
        drop(db);

        let (_db, created) = Database::open(&path).unwrap();
        assert!(!created);
    }

    #[test]
    fn refuses_newer_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.pragma_update(None, "user_version", 7).unwrap();
        }

        match Database::open(&path) {
            Err(StoreError::SchemaVersion { found, supported }) => {
                assert_eq!(found, 7);
                assert_eq!(supported, SCHEMA_VERSION);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("newer schema must not open"),
        }
    }

    #[test]
    fn unreachable_location_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("estates.db");
        assert!(matches!(Database::open(&path), Err(StoreError::Open(_))));
    }
}
