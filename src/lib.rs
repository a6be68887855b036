// SPDX-License-Identifier: MPL-2.0

//! Upcoming rocket launches from Launch Library 2, with favorites and an
//! offline SQLite cache.

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod runtime;
pub mod state;

pub use api::{ClientError, LaunchApi, SpaceDevsClient};
pub use app::{AppError, LaunchCompanion, init_logging};
pub use cache::{CacheDb, CacheError};
pub use model::{Launch, LaunchDetail, LauncherConfig, SortOrder};
pub use repository::{LaunchRepository, RepositoryError};
pub use state::AppSettings;
