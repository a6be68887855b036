// SPDX-License-Identifier: MPL-2.0

use crate::api::{ClientError, LaunchApi};
use crate::cache::{CacheDb, DetailCache, FavoriteCache, LaunchCache};
use crate::config::{CACHE_RETENTION_MS, NETWORK_TIMEOUT};
use crate::mapper::{
    cached_detail_from_domain, cached_launch_from_domain, detail_from_cached, detail_from_remote,
    launch_from_cached, launch_from_remote, launcher_config_from_remote,
};
use crate::model::{Launch, LaunchDetail, LauncherConfig, SortOrder};
use crate::repository::RepositoryError;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Single source of launch data for the rest of the app.
///
/// Reads go to the remote API first and fall back to the local cache.
/// Favorites live only in the cache.
pub struct LaunchRepository {
    api: Arc<dyn LaunchApi>,
    db: CacheDb,
    timeout: Duration,
}

impl LaunchRepository {
    pub fn new(api: Arc<dyn LaunchApi>, db: CacheDb) -> Self {
        Self {
            api,
            db,
            timeout: NETWORK_TIMEOUT,
        }
    }

    /// Bound every remote call by `timeout` instead of the default 10s
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cache(&self) -> &CacheDb {
        &self.db
    }

    async fn remote<T>(
        &self,
        request: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ClientError> {
        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| ClientError::Timeout)?
    }

    fn retention_cutoff() -> i64 {
        CacheDb::now_millis() - CACHE_RETENTION_MS
    }

    /// Upcoming launches in the order the API returned them.
    ///
    /// A successful fetch refreshes the cache; any failure returns the
    /// cached list instead.
    pub async fn get_upcoming_launches(&self) -> Vec<Launch> {
        match self.remote(self.api.fetch_upcoming()).await {
            Ok(page) => {
                let launches: Vec<Launch> =
                    page.results.into_iter().map(launch_from_remote).collect();
                info!("Fetched {} upcoming launches", launches.len());

                let cutoff = Self::retention_cutoff();
                match self
                    .db
                    .blocking(move |db| LaunchCache::new(db).delete_older_than(cutoff))
                    .await
                {
                    Ok(0) => {}
                    Ok(n) => debug!("Evicted {} stale cached launches", n),
                    Err(e) => warn!("Failed to evict stale launches: {}", e),
                }
                self.cache_launches(&launches).await;

                launches
            }
            Err(e) => {
                warn!("Failed to fetch upcoming launches, using cache: {}", e);
                self.get_cached_launches().await
            }
        }
    }

    /// Full record for one launch, from the API or else the cache.
    ///
    /// A cached detail only carries the persisted columns.
    pub async fn get_launch_detail(&self, id: &str) -> Result<LaunchDetail, RepositoryError> {
        let err = match self.remote(self.api.fetch_detail(id)).await {
            Ok(remote) => {
                let detail = detail_from_remote(remote);
                let row = cached_detail_from_domain(&detail, CacheDb::now_millis());
                let cutoff = Self::retention_cutoff();

                let stored = self
                    .db
                    .blocking(move |db| {
                        let details = DetailCache::new(db);
                        if let Err(e) = details.delete_older_than(cutoff) {
                            warn!("Failed to evict stale launch details: {}", e);
                        }
                        details.store(&row)
                    })
                    .await;
                if let Err(e) = stored {
                    warn!("Failed to cache launch detail {}: {}", id, e);
                }

                return Ok(detail);
            }
            Err(e) => e,
        };

        warn!("Failed to fetch launch {}: {}", id, err);
        let owned = id.to_string();
        match self
            .db
            .blocking(move |db| DetailCache::new(db).get(&owned))
            .await
        {
            Ok(Some(row)) => {
                info!("Serving launch {} from cache", id);
                Ok(detail_from_cached(row))
            }
            Ok(None) => Err(err.into()),
            Err(e) => {
                error!("Failed to read cached launch {}: {}", id, e);
                Err(err.into())
            }
        }
    }

    /// Write launches to the cache stamped with the current time
    pub async fn cache_launches(&self, launches: &[Launch]) {
        let now = CacheDb::now_millis();
        let rows: Vec<_> = launches
            .iter()
            .map(|l| cached_launch_from_domain(l, now))
            .collect();
        let count = rows.len();

        if let Err(e) = self
            .db
            .blocking(move |db| LaunchCache::new(db).store_batch(&rows))
            .await
        {
            warn!("Failed to cache {} launches: {}", count, e);
        }
    }

    /// Up to 50 most recently cached launches
    pub async fn get_cached_launches(&self) -> Vec<Launch> {
        match self.db.blocking(|db| LaunchCache::new(db).recent()).await {
            Ok(rows) => rows.into_iter().map(launch_from_cached).collect(),
            Err(e) => {
                error!("Failed to read cached launches: {}", e);
                Vec::new()
            }
        }
    }

    /// Mark a launch as favorite. The launch does not have to be cached.
    pub async fn add_to_favorites(&self, id: &str) -> Result<(), RepositoryError> {
        let owned = id.to_string();
        let added_at = CacheDb::now_millis();
        self.db
            .blocking(move |db| FavoriteCache::new(db).add(&owned, added_at))
            .await?;
        debug!("Added {} to favorites", id);
        Ok(())
    }

    pub async fn remove_from_favorites(&self, id: &str) -> Result<(), RepositoryError> {
        let owned = id.to_string();
        self.db
            .blocking(move |db| FavoriteCache::new(db).remove(&owned))
            .await?;
        debug!("Removed {} from favorites", id);
        Ok(())
    }

    pub async fn is_favorite(&self, id: &str) -> bool {
        let owned = id.to_string();
        match self
            .db
            .blocking(move |db| FavoriteCache::new(db).get(&owned))
            .await
        {
            Ok(marker) => marker.is_some(),
            Err(e) => {
                error!("Failed to read favorite {}: {}", id, e);
                false
            }
        }
    }

    /// Cached launches marked as favorite, most recently added first.
    ///
    /// Favorites whose launch is no longer cached are not listed.
    pub async fn get_favorite_launches(&self) -> Vec<Launch> {
        match self.db.blocking(|db| LaunchCache::new(db).favorites()).await {
            Ok(rows) => rows.into_iter().map(launch_from_cached).collect(),
            Err(e) => {
                error!("Failed to read favorite launches: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_launches_sorted_by(&self, order: SortOrder) -> Vec<Launch> {
        let mut launches = self.get_upcoming_launches().await;
        order.sort(&mut launches);
        launches
    }

    /// Drop every cached launch and detail. Favorites are kept.
    ///
    /// Storage failures are logged, not returned.
    pub async fn clear_cache(&self) {
        let cutoff = CacheDb::now_millis() + 1;
        match self
            .db
            .blocking(move |db| db.delete_cached_before(cutoff))
            .await
        {
            Ok(()) => info!("Cleared launch cache"),
            Err(e) => error!("Failed to clear launch cache: {}", e),
        }
    }

    /// Launch vehicle configurations, straight from the API
    pub async fn get_launcher_configs(&self) -> Result<Vec<LauncherConfig>, RepositoryError> {
        match self.remote(self.api.fetch_launcher_configs()).await {
            Ok(page) => Ok(page
                .results
                .into_iter()
                .map(launcher_config_from_remote)
                .collect()),
            Err(e) => {
                warn!("Failed to fetch launcher configs: {}", e);
                Err(e.into())
            }
        }
    }
}
