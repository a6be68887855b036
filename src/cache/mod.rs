// SPDX-License-Identifier: MPL-2.0

mod db;
mod details;
mod favorites;
mod launches;
mod rows;
mod schema;

pub use db::CacheDb;
pub use details::DetailCache;
pub use favorites::FavoriteCache;
pub use launches::LaunchCache;
pub use rows::{CachedLaunch, CachedLaunchDetail, FavoriteMarker};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("database path error: {0}")]
    Path(String),
    #[error("cache lock poisoned")]
    LockPoisoned,
    #[error("cache task failed: {0}")]
    Task(String),
}
