// SPDX-License-Identifier: MPL-2.0

//! Async runtime for network and cache work.
//!
//! The application owns exactly one runtime, built here and held by
//! [`crate::app::LaunchCompanion`].

use tokio::runtime::Runtime;

/// Two workers are plenty for a handful of I/O-bound requests
pub const WORKER_THREADS: usize = 2;

/// Build the multi-threaded runtime used for all async operations
pub fn build() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(WORKER_THREADS)
        .enable_all()
        .thread_name("launch-companion")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_runs_futures() {
        let runtime = build().unwrap();
        let value = runtime.block_on(async {
            tokio::task::spawn(async { 21 * 2 }).await.unwrap()
        });
        assert_eq!(value, 42);
    }

    #[test]
    fn test_runtime_has_timers() {
        let runtime = build().unwrap();
        runtime.block_on(async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        });
    }
}
