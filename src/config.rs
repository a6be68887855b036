// SPDX-License-Identifier: MPL-2.0

use std::time::Duration;

pub const APP_ID: &str = "io.github.launchcompanion";
pub const APP_NAME: &str = "Launch Companion";

/// Launch Library 2 endpoint (free tier, ~15 requests/hour)
pub const DEFAULT_API_BASE: &str = "https://ll.thespacedevs.com/2.0.0/";

pub const USER_AGENT: &str = concat!("launch-companion/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a single remote call before we fall back to the cache
pub const NETWORK_TIMEOUT: Duration = Duration::from_secs(10);

/// Cached rows older than this are evicted on the next successful refresh
pub const CACHE_RETENTION_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Maximum number of summary rows returned from the cache
pub const CACHED_LAUNCH_LIMIT: usize = 50;

/// Used when a 429 response carries no usable Retry-After header
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 900;
