// SPDX-License-Identifier: MPL-2.0

//! Composition root: builds the runtime, HTTP client, cache and repository
//! once and hands out the repository to the rest of the app.

use crate::api::{ClientError, SpaceDevsClient};
use crate::cache::{CacheDb, CacheError};
use crate::repository::LaunchRepository;
use crate::runtime;
use crate::state::AppSettings;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("client error: {0}")]
    Client(#[from] ClientError),
    #[error("runtime error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`; our own crate logs at info by default. Calling this
/// more than once is harmless.
pub fn init_logging() -> Result<(), AppError> {
    let directive: Directive = "launch_companion=info"
        .parse()
        .map_err(|e| AppError::Logging(format!("{}", e)))?;

    // Fails only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .try_init();

    Ok(())
}

pub struct LaunchCompanion {
    runtime: Runtime,
    repository: Arc<LaunchRepository>,
    settings: AppSettings,
}

impl LaunchCompanion {
    /// Wire everything up against the on-disk cache
    pub fn new(settings: AppSettings) -> Result<Self, AppError> {
        let db = CacheDb::open_default()?;
        Self::with_cache(settings, db)
    }

    /// Wire everything up against an already-open cache
    pub fn with_cache(settings: AppSettings, db: CacheDb) -> Result<Self, AppError> {
        let runtime = runtime::build()?;
        let client =
            SpaceDevsClient::with_base_url(&settings.api_base_url, settings.request_timeout())?;
        info!("Using launch API at {}", client.base_url());

        let repository = LaunchRepository::new(Arc::new(client), db)
            .with_timeout(settings.request_timeout());

        Ok(Self {
            runtime,
            repository: Arc::new(repository),
            settings,
        })
    }

    pub fn repository(&self) -> Arc<LaunchRepository> {
        self.repository.clone()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Execute a future on the app runtime, blocking until completion.
    /// Use this from synchronous code that needs to call async functions.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Spawn a future on the app runtime without blocking
    pub fn spawn<F>(&self, future: F) -> tokio::task::JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.runtime.spawn(future)
    }
}
