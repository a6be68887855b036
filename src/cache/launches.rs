// SPDX-License-Identifier: MPL-2.0

use crate::cache::{CacheDb, CacheError, CachedLaunch};
use crate::config::CACHED_LAUNCH_LIMIT;
use rusqlite::params;

const LAUNCH_COLUMNS: &str = r#"
    l.id, l.name, l.status_name, l.status_description, l.launch_service_provider,
    l.mission_name, l.mission_description, l.mission_type,
    l.rocket_name, l.rocket_family, l.rocket_variant,
    l.pad_name, l.location_name, l.country, l.net, l.image, l.cached_at
"#;

/// Cache operations for launch summaries
pub struct LaunchCache<'a> {
    db: &'a CacheDb,
}

impl<'a> LaunchCache<'a> {
    pub fn new(db: &'a CacheDb) -> Self {
        Self { db }
    }

    /// Store multiple launches in a transaction, replacing rows with the same id.
    ///
    /// REPLACE deletes and reinserts, so rowids follow batch order and
    /// [`LaunchCache::recent`] can hand the batch back in the order it was written.
    pub fn store_batch(&self, launches: &[CachedLaunch]) -> Result<(), CacheError> {
        let mut conn = self.db.conn()?;
        let tx = conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                r#"
                INSERT OR REPLACE INTO cached_launches (
                    id, name, status_name, status_description, launch_service_provider,
                    mission_name, mission_description, mission_type,
                    rocket_name, rocket_family, rocket_variant,
                    pad_name, location_name, country, net, image, cached_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
                "#,
            )?;

            for launch in launches {
                stmt.execute(params![
                    launch.id,
                    launch.name,
                    launch.status_name,
                    launch.status_description,
                    launch.launch_service_provider,
                    launch.mission_name,
                    launch.mission_description,
                    launch.mission_type,
                    launch.rocket_name,
                    launch.rocket_family,
                    launch.rocket_variant,
                    launch.pad_name,
                    launch.location_name,
                    launch.country,
                    launch.net,
                    launch.image,
                    launch.cached_at,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Most recently cached launches, newest first, capped at 50
    pub fn recent(&self) -> Result<Vec<CachedLaunch>, CacheError> {
        let conn = self.db.conn()?;

        let query = format!(
            "SELECT {} FROM cached_launches l ORDER BY l.cached_at DESC, l.rowid ASC LIMIT ?",
            LAUNCH_COLUMNS
        );
        let mut stmt = conn.prepare(&query)?;
        let launches = stmt
            .query_map([CACHED_LAUNCH_LIMIT as i64], Self::row_to_launch)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(launches)
    }

    /// Cached launches that carry a favorite marker, most recently favorited first
    pub fn favorites(&self) -> Result<Vec<CachedLaunch>, CacheError> {
        let conn = self.db.conn()?;

        let query = format!(
            r#"
            SELECT {}
            FROM cached_launches l
            JOIN favorite_launches f ON f.launch_id = l.id
            ORDER BY f.added_at DESC, f.rowid DESC
            "#,
            LAUNCH_COLUMNS
        );
        let mut stmt = conn.prepare(&query)?;
        let launches = stmt
            .query_map([], Self::row_to_launch)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(launches)
    }

    /// Delete launches cached before `cutoff` (unix millis). Returns rows removed.
    pub fn delete_older_than(&self, cutoff: i64) -> Result<usize, CacheError> {
        let conn = self.db.conn()?;
        let deleted = conn.execute("DELETE FROM cached_launches WHERE cached_at < ?", [cutoff])?;
        Ok(deleted)
    }

    pub fn count(&self) -> Result<usize, CacheError> {
        let conn = self.db.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM cached_launches", [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }

    /// Convert a database row to a CachedLaunch
    fn row_to_launch(row: &rusqlite::Row) -> Result<CachedLaunch, rusqlite::Error> {
        Ok(CachedLaunch {
            id: row.get(0)?,
            name: row.get(1)?,
            status_name: row.get(2)?,
            status_description: row.get(3)?,
            launch_service_provider: row.get(4)?,
            mission_name: row.get(5)?,
            mission_description: row.get(6)?,
            mission_type: row.get(7)?,
            rocket_name: row.get(8)?,
            rocket_family: row.get(9)?,
            rocket_variant: row.get(10)?,
            pad_name: row.get(11)?,
            location_name: row.get(12)?,
            country: row.get(13)?,
            net: row.get(14)?,
            image: row.get(15)?,
            cached_at: row.get(16)?,
        })
    }
}
