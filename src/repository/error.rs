// SPDX-License-Identifier: MPL-2.0

use crate::api::ClientError;
use crate::cache::CacheError;
use crate::config::DEFAULT_RETRY_AFTER_SECS;
use thiserror::Error;

/// Failures the repository reports to its callers
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("network unavailable")]
    Offline,
    #[error("request timed out")]
    Timeout,
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },
    #[error("launch not found")]
    NotFound,
    #[error("server error (HTTP {status})")]
    Server { status: u16 },
    #[error("{0}")]
    Unknown(String),
    #[error("storage error: {0}")]
    Storage(#[from] CacheError),
}

impl From<ClientError> for RepositoryError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Http {
                status: 429,
                retry_after,
            } => RepositoryError::RateLimited {
                retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
            },
            ClientError::Http { status: 404, .. } => RepositoryError::NotFound,
            ClientError::Http { status, .. } => RepositoryError::Server { status },
            ClientError::Transport(_) => RepositoryError::Offline,
            ClientError::Timeout => RepositoryError::Timeout,
            ClientError::Decode(msg) | ClientError::InvalidUrl(msg) | ClientError::Other(msg) => {
                RepositoryError::Unknown(msg)
            }
        }
    }
}

impl RepositoryError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            RepositoryError::Offline => {
                "You appear to be offline. Check your internet connection.".to_string()
            }
            RepositoryError::Timeout => "The server is not responding. Try again later.".to_string(),
            RepositoryError::RateLimited { retry_after_secs } => {
                let minutes = retry_after_secs.div_ceil(60).max(1);
                let unit = if minutes == 1 { "minute" } else { "minutes" };
                format!("Too many requests. Try again in {} {}.", minutes, unit)
            }
            RepositoryError::NotFound => "This launch could not be found.".to_string(),
            RepositoryError::Server { .. } => {
                "The launch service is having trouble. Try again later.".to_string()
            }
            RepositoryError::Unknown(_) => "Launch data could not be loaded.".to_string(),
            RepositoryError::Storage(_) => "Could not save your change.".to_string(),
        }
    }

    /// Whether retrying the same request can succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, retry_after: Option<u64>) -> ClientError {
        ClientError::Http {
            status,
            retry_after,
        }
    }

    #[test]
    fn test_classify_http_statuses() {
        assert!(matches!(
            RepositoryError::from(http(429, Some(120))),
            RepositoryError::RateLimited {
                retry_after_secs: 120
            }
        ));
        assert!(matches!(
            RepositoryError::from(http(429, None)),
            RepositoryError::RateLimited {
                retry_after_secs: 900
            }
        ));
        assert!(matches!(
            RepositoryError::from(http(404, None)),
            RepositoryError::NotFound
        ));
        assert!(matches!(
            RepositoryError::from(http(503, None)),
            RepositoryError::Server { status: 503 }
        ));
    }

    #[test]
    fn test_classify_transport_failures() {
        assert!(matches!(
            RepositoryError::from(ClientError::Transport("refused".to_string())),
            RepositoryError::Offline
        ));
        assert!(matches!(
            RepositoryError::from(ClientError::Timeout),
            RepositoryError::Timeout
        ));
        match RepositoryError::from(ClientError::Decode("expected value".to_string())) {
            RepositoryError::Unknown(msg) => assert_eq!(msg, "expected value"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rate_limit_message_rounds_up_minutes() {
        let msg = |secs| RepositoryError::RateLimited {
            retry_after_secs: secs,
        }
        .user_message();

        assert_eq!(msg(0), "Too many requests. Try again in 1 minute.");
        assert_eq!(msg(30), "Too many requests. Try again in 1 minute.");
        assert_eq!(msg(120), "Too many requests. Try again in 2 minutes.");
        assert_eq!(msg(121), "Too many requests. Try again in 3 minutes.");
        assert_eq!(msg(900), "Too many requests. Try again in 15 minutes.");
    }

    #[test]
    fn test_user_messages_hide_details() {
        let server = RepositoryError::Server { status: 502 }.user_message();
        assert!(!server.contains("502"));
        let unknown = RepositoryError::Unknown("EOF while parsing".to_string()).user_message();
        assert!(!unknown.contains("EOF"));
    }

    #[test]
    fn test_storage_message_is_about_saving() {
        let err = RepositoryError::from(CacheError::LockPoisoned);
        assert_eq!(err.user_message(), "Could not save your change.");
        assert_ne!(
            err.user_message(),
            RepositoryError::Unknown(String::new()).user_message()
        );
    }

    #[test]
    fn test_only_not_found_is_final() {
        assert!(!RepositoryError::NotFound.is_retryable());
        assert!(RepositoryError::Offline.is_retryable());
        assert!(RepositoryError::Timeout.is_retryable());
        assert!(RepositoryError::Server { status: 500 }.is_retryable());
        assert!(
            RepositoryError::RateLimited {
                retry_after_secs: 60
            }
            .is_retryable()
        );
    }
}
