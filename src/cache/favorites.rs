// SPDX-License-Identifier: MPL-2.0

use crate::cache::{CacheDb, CacheError, FavoriteMarker};
use rusqlite::{OptionalExtension, params};

/// Cache operations for favorite markers.
///
/// Markers are independent of the launch tables: evicting a cached launch
/// keeps its marker, and removing a marker keeps the cached launch.
pub struct FavoriteCache<'a> {
    db: &'a CacheDb,
}

impl<'a> FavoriteCache<'a> {
    pub fn new(db: &'a CacheDb) -> Self {
        Self { db }
    }

    /// Mark a launch as favorite (upserts, refreshing `added_at`)
    pub fn add(&self, launch_id: &str, added_at: i64) -> Result<(), CacheError> {
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO favorite_launches (launch_id, added_at) VALUES (?1, ?2)",
            params![launch_id, added_at],
        )?;
        Ok(())
    }

    /// Remove a marker; removing an absent marker is not an error
    pub fn remove(&self, launch_id: &str) -> Result<(), CacheError> {
        let conn = self.db.conn()?;
        conn.execute(
            "DELETE FROM favorite_launches WHERE launch_id = ?",
            [launch_id],
        )?;
        Ok(())
    }

    pub fn get(&self, launch_id: &str) -> Result<Option<FavoriteMarker>, CacheError> {
        let conn = self.db.conn()?;
        let marker = conn
            .query_row(
                "SELECT launch_id, added_at FROM favorite_launches WHERE launch_id = ?",
                [launch_id],
                |row| {
                    Ok(FavoriteMarker {
                        launch_id: row.get(0)?,
                        added_at: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(marker)
    }

    /// All markers, most recently added first
    pub fn all(&self) -> Result<Vec<FavoriteMarker>, CacheError> {
        let conn = self.db.conn()?;
        let mut stmt = conn.prepare(
            "SELECT launch_id, added_at FROM favorite_launches ORDER BY added_at DESC, rowid DESC",
        )?;
        let markers = stmt
            .query_map([], |row| {
                Ok(FavoriteMarker {
                    launch_id: row.get(0)?,
                    added_at: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LaunchCache;
    use crate::cache::launches::tests::cached;

    #[test]
    fn test_add_get_remove() {
        let db = CacheDb::open_in_memory().unwrap();
        let favorites = FavoriteCache::new(&db);

        favorites.add("x", 42).unwrap();
        assert_eq!(
            favorites.get("x").unwrap(),
            Some(FavoriteMarker {
                launch_id: "x".to_string(),
                added_at: 42,
            })
        );

        favorites.remove("x").unwrap();
        assert!(favorites.get("x").unwrap().is_none());
        // Second removal is a no-op
        favorites.remove("x").unwrap();
    }

    #[test]
    fn test_add_twice_keeps_one_marker() {
        let db = CacheDb::open_in_memory().unwrap();
        let favorites = FavoriteCache::new(&db);

        favorites.add("x", 1).unwrap();
        favorites.add("x", 2).unwrap();

        let all = favorites.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].added_at, 2);
    }

    #[test]
    fn test_markers_survive_cache_eviction() {
        let db = CacheDb::open_in_memory().unwrap();
        let launches = LaunchCache::new(&db);
        let favorites = FavoriteCache::new(&db);

        launches.store_batch(&[cached("x", 1)]).unwrap();
        favorites.add("x", 1).unwrap();
        db.delete_cached_before(i64::MAX).unwrap();

        assert_eq!(launches.count().unwrap(), 0);
        assert!(favorites.get("x").unwrap().is_some());
    }
}
