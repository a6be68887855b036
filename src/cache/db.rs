// SPDX-License-Identifier: MPL-2.0

use crate::cache::CacheError;
use crate::cache::schema::{MIGRATION_V2, SCHEMA_V1, SCHEMA_VERSION};
use crate::config::APP_ID;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Handle to the launch cache database.
///
/// Cloning shares the same connection. Every statement runs under the mutex,
/// so writers are serialized and readers never see a half-applied statement.
#[derive(Clone)]
pub struct CacheDb {
    conn: Arc<Mutex<Connection>>,
}

impl CacheDb {
    /// Open or create the cache database at `path`
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CacheError::Path(format!("failed to create cache dir: {}", e)))?;
        }

        info!("Opening launch cache at {}", path.display());
        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!("Cache journal mode: {}", mode);

        Self::from_connection(conn)
    }

    /// Open the cache in the platform data directory.
    /// Path: ~/.local/share/io.github.launchcompanion/cache.db
    pub fn open_default() -> Result<Self, CacheError> {
        Self::open(&Self::default_path()?)
    }

    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, CacheError> {
        Self::migrate(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Bring the schema up to [`SCHEMA_VERSION`]. Each step is additive.
    fn migrate(conn: &Connection) -> Result<(), CacheError> {
        let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version < 1 {
            debug!("Creating cache schema v1");
            conn.execute_batch(SCHEMA_V1)?;
        }
        if version < 2 {
            debug!("Migrating cache schema to v2");
            conn.execute_batch(MIGRATION_V2)?;
        }
        if version < SCHEMA_VERSION {
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            info!("Cache schema at v{} (was v{})", SCHEMA_VERSION, version);
        }

        Ok(())
    }

    fn default_path() -> Result<PathBuf, CacheError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| CacheError::Path("could not find data directory".to_string()))?;

        Ok(data_dir.join(APP_ID).join("cache.db"))
    }

    /// Access connection for operations
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>, CacheError> {
        self.conn.lock().map_err(|_| CacheError::LockPoisoned)
    }

    /// Run `op` on the blocking thread pool with its own handle to the cache.
    ///
    /// Statements and the connection lock stay off the async workers.
    pub async fn blocking<T, F>(&self, op: F) -> Result<T, CacheError>
    where
        F: FnOnce(&CacheDb) -> Result<T, CacheError> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        tokio::task::spawn_blocking(move || op(&db))
            .await
            .map_err(|e| CacheError::Task(e.to_string()))?
    }

    /// Current time in unix millis, the unit of every timestamp column
    pub fn now_millis() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Delete summary and detail rows cached before `cutoff`.
    /// Favorites are left alone.
    pub fn delete_cached_before(&self, cutoff: i64) -> Result<(), CacheError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let launches = tx.execute("DELETE FROM cached_launches WHERE cached_at < ?", [cutoff])?;
        let details = tx.execute(
            "DELETE FROM cached_launch_details WHERE cached_at < ?",
            [cutoff],
        )?;

        tx.commit()?;
        debug!(
            "Deleted {} cached launches and {} cached details",
            launches, details
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(db: &CacheDb) -> Vec<String> {
        let conn = db.conn().unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn test_fresh_database_has_all_tables() {
        let db = CacheDb::open_in_memory().unwrap();
        let tables = table_names(&db);
        assert!(tables.contains(&"cached_launches".to_string()));
        assert!(tables.contains(&"cached_launch_details".to_string()));
        assert!(tables.contains(&"favorite_launches".to_string()));

        let version: i32 = db
            .conn()
            .unwrap()
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_migrates_summary_only_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.db");

        // A database written before details were cached
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(SCHEMA_V1).unwrap();
            conn.pragma_update(None, "user_version", 1).unwrap();
            conn.execute(
                "INSERT INTO cached_launches (id, name, status_name, launch_service_provider,
                    pad_name, location_name, country, net, cached_at)
                 VALUES ('old', 'Old Launch', 'Go', 'SpaceX', 'LC-39A', 'KSC', 'USA',
                    '2024-01-01T00:00:00Z', 1)",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO favorite_launches (launch_id, added_at) VALUES ('old', 2)",
                [],
            )
            .unwrap();
        }

        let db = CacheDb::open(&path).unwrap();
        assert!(table_names(&db).contains(&"cached_launch_details".to_string()));

        let conn = db.conn().unwrap();
        let name: String = conn
            .query_row("SELECT name FROM cached_launches WHERE id = 'old'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(name, "Old Launch");
        let favorites: i64 = conn
            .query_row("SELECT COUNT(*) FROM favorite_launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(favorites, 1);
    }

    #[tokio::test]
    async fn test_blocking_runs_on_shared_connection() {
        let db = CacheDb::open_in_memory().unwrap();
        db.blocking(|db| {
            db.conn()?
                .execute("INSERT INTO favorite_launches (launch_id, added_at) VALUES ('x', 1)", [])?;
            Ok(())
        })
        .await
        .unwrap();

        let count: i64 = db
            .conn()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM favorite_launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_blocking_reports_panics() {
        let db = CacheDb::open_in_memory().unwrap();
        let result: Result<(), CacheError> = db.blocking(|_| panic!("boom")).await;
        assert!(matches!(result, Err(CacheError::Task(_))));
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.db");

        drop(CacheDb::open(&path).unwrap());
        let db = CacheDb::open(&path).unwrap();
        assert_eq!(table_names(&db).len(), 3);
    }
}
