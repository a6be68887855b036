// SPDX-License-Identifier: MPL-2.0

use crate::api::types::{RemoteLaunchDetail, RemoteLaunchPage, RemoteLauncherConfigPage};
use crate::config::{DEFAULT_API_BASE, NETWORK_TIMEOUT, USER_AGENT};
use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Error, Debug)]
pub enum ClientError {
    /// No route to the server: DNS failure, refused or dropped connection
    #[error("network unavailable: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}")]
    Http {
        status: u16,
        /// Seconds from the Retry-After header, when present and numeric
        retry_after: Option<u64>,
    },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Transport(e.to_string())
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Other(e.to_string())
        }
    }
}

/// The three Launch Library endpoints the app consumes.
///
/// Implemented by [`SpaceDevsClient`] for the real service; tests substitute
/// their own implementation.
#[async_trait]
pub trait LaunchApi: Send + Sync {
    async fn fetch_upcoming(&self) -> Result<RemoteLaunchPage, ClientError>;

    async fn fetch_detail(&self, id: &str) -> Result<RemoteLaunchDetail, ClientError>;

    async fn fetch_launcher_configs(&self) -> Result<RemoteLauncherConfigPage, ClientError>;
}

/// Wraps reqwest so the rest of the app only sees our own types.
#[derive(Debug, Clone)]
pub struct SpaceDevsClient {
    http: Client,
    base_url: Url,
}

impl SpaceDevsClient {
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_API_BASE, NETWORK_TIMEOUT)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        // Url::join drops the last segment unless the base ends in a slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base_url =
            Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(normalized));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Other(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments, keeping the trailing slash
    /// the API expects. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        let response = Self::check_status(&url, response)?;
        Ok(response.json::<T>().await?)
    }

    fn check_status(url: &Url, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after = if status == StatusCode::TOO_MANY_REQUESTS {
            response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
        } else {
            None
        };

        warn!(
            "GET {} returned {} (retry-after: {:?})",
            url,
            status.as_u16(),
            retry_after
        );

        Err(ClientError::Http {
            status: status.as_u16(),
            retry_after,
        })
    }
}

#[async_trait]
impl LaunchApi for SpaceDevsClient {
    async fn fetch_upcoming(&self) -> Result<RemoteLaunchPage, ClientError> {
        let url = self.endpoint(&["launch", "upcoming"])?;
        self.get_json(url).await
    }

    async fn fetch_detail(&self, id: &str) -> Result<RemoteLaunchDetail, ClientError> {
        let url = self.endpoint(&["launch", id])?;
        self.get_json(url).await
    }

    async fn fetch_launcher_configs(&self) -> Result<RemoteLauncherConfigPage, ClientError> {
        let url = self.endpoint(&["config", "launcher"])?;
        self.get_json(url).await
    }
}
