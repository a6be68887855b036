// SPDX-License-Identifier: MPL-2.0

use crate::cache::{CacheDb, CacheError, CachedLaunchDetail};
use rusqlite::{OptionalExtension, params};

/// Cache operations for launch details
pub struct DetailCache<'a> {
    db: &'a CacheDb,
}

impl<'a> DetailCache<'a> {
    pub fn new(db: &'a CacheDb) -> Self {
        Self { db }
    }

    /// Store a detail row (upserts)
    pub fn store(&self, detail: &CachedLaunchDetail) -> Result<(), CacheError> {
        let conn = self.db.conn()?;

        conn.execute(
            r#"
            INSERT INTO cached_launch_details (
                id, name, status_name, status_description,
                provider_id, provider_name, provider_type, provider_country_code,
                mission_name, mission_description, mission_type,
                rocket_name, rocket_family,
                pad_name, location_name, country_code,
                window_start, window_end, net,
                image, infographic, description, cached_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                      ?17, ?18, ?19, ?20, ?21, ?22, ?23)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                status_name = excluded.status_name,
                status_description = excluded.status_description,
                provider_id = excluded.provider_id,
                provider_name = excluded.provider_name,
                provider_type = excluded.provider_type,
                provider_country_code = excluded.provider_country_code,
                mission_name = excluded.mission_name,
                mission_description = excluded.mission_description,
                mission_type = excluded.mission_type,
                rocket_name = excluded.rocket_name,
                rocket_family = excluded.rocket_family,
                pad_name = excluded.pad_name,
                location_name = excluded.location_name,
                country_code = excluded.country_code,
                window_start = excluded.window_start,
                window_end = excluded.window_end,
                net = excluded.net,
                image = excluded.image,
                infographic = excluded.infographic,
                description = excluded.description,
                cached_at = excluded.cached_at
            "#,
            params![
                detail.id,
                detail.name,
                detail.status_name,
                detail.status_description,
                detail.provider_id,
                detail.provider_name,
                detail.provider_type,
                detail.provider_country_code,
                detail.mission_name,
                detail.mission_description,
                detail.mission_type,
                detail.rocket_name,
                detail.rocket_family,
                detail.pad_name,
                detail.location_name,
                detail.country_code,
                detail.window_start,
                detail.window_end,
                detail.net,
                detail.image,
                detail.infographic,
                detail.description,
                detail.cached_at,
            ],
        )?;

        Ok(())
    }

    /// Get detail by launch id
    pub fn get(&self, id: &str) -> Result<Option<CachedLaunchDetail>, CacheError> {
        let conn = self.db.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT
                id, name, status_name, status_description,
                provider_id, provider_name, provider_type, provider_country_code,
                mission_name, mission_description, mission_type,
                rocket_name, rocket_family,
                pad_name, location_name, country_code,
                window_start, window_end, net,
                image, infographic, description, cached_at
            FROM cached_launch_details
            WHERE id = ?
            "#,
        )?;

        let detail = stmt
            .query_row([id], |row| {
                Ok(CachedLaunchDetail {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    status_name: row.get(2)?,
                    status_description: row.get(3)?,
                    provider_id: row.get(4)?,
                    provider_name: row.get(5)?,
                    provider_type: row.get(6)?,
                    provider_country_code: row.get(7)?,
                    mission_name: row.get(8)?,
                    mission_description: row.get(9)?,
                    mission_type: row.get(10)?,
                    rocket_name: row.get(11)?,
                    rocket_family: row.get(12)?,
                    pad_name: row.get(13)?,
                    location_name: row.get(14)?,
                    country_code: row.get(15)?,
                    window_start: row.get(16)?,
                    window_end: row.get(17)?,
                    net: row.get(18)?,
                    image: row.get(19)?,
                    infographic: row.get(20)?,
                    description: row.get(21)?,
                    cached_at: row.get(22)?,
                })
            })
            .optional()?;

        Ok(detail)
    }

    /// Delete details cached before `cutoff` (unix millis). Returns rows removed.
    pub fn delete_older_than(&self, cutoff: i64) -> Result<usize, CacheError> {
        let conn = self.db.conn()?;
        let deleted = conn.execute(
            "DELETE FROM cached_launch_details WHERE cached_at < ?",
            [cutoff],
        )?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str, cached_at: i64) -> CachedLaunchDetail {
        CachedLaunchDetail {
            id: id.to_string(),
            name: "Artemis II".to_string(),
            status_name: "TBD".to_string(),
            status_description: Some("Awaiting official date".to_string()),
            provider_id: 44,
            provider_name: "NASA".to_string(),
            provider_type: Some("Government".to_string()),
            provider_country_code: Some("USA".to_string()),
            mission_name: Some("Artemis II".to_string()),
            mission_description: None,
            mission_type: Some("Human Exploration".to_string()),
            rocket_name: Some("SLS Block 1".to_string()),
            rocket_family: Some("SLS".to_string()),
            pad_name: "LC-39B".to_string(),
            location_name: "Kennedy Space Center".to_string(),
            country_code: "USA".to_string(),
            window_start: "2025-09-01T00:00:00Z".to_string(),
            window_end: "2025-09-01T02:00:00Z".to_string(),
            net: "2025-09-01T00:00:00Z".to_string(),
            image: None,
            infographic: None,
            description: None,
            cached_at,
        }
    }

    #[test]
    fn test_get_missing_returns_none() {
        let db = CacheDb::open_in_memory().unwrap();
        assert!(DetailCache::new(&db).get("nope").unwrap().is_none());
    }

    #[test]
    fn test_store_upserts() {
        let db = CacheDb::open_in_memory().unwrap();
        let cache = DetailCache::new(&db);

        cache.store(&detail("a", 1)).unwrap();
        let mut newer = detail("a", 2);
        newer.status_name = "Go".to_string();
        cache.store(&newer).unwrap();

        assert_eq!(cache.get("a").unwrap(), Some(newer));
    }

    #[test]
    fn test_delete_older_than() {
        let db = CacheDb::open_in_memory().unwrap();
        let cache = DetailCache::new(&db);

        cache.store(&detail("old", 1)).unwrap();
        cache.store(&detail("new", 10)).unwrap();

        assert_eq!(cache.delete_older_than(5).unwrap(), 1);
        assert!(cache.get("old").unwrap().is_none());
        assert!(cache.get("new").unwrap().is_some());
    }
}
