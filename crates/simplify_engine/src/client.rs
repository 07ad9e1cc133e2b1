use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use crate::{CleanError, FailureKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/clean_html".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Client for the cleaning service. One request per call, no retries, no
/// caching; the fetch-once policy lives in the state machine.
#[async_trait::async_trait]
pub trait SnapshotClient: Send + Sync {
    async fn fetch_cleaned(&self, html: &str) -> Result<String, CleanError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSnapshotClient {
    settings: ClientSettings,
}

impl ReqwestSnapshotClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, CleanError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| CleanError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl SnapshotClient for ReqwestSnapshotClient {
    async fn fetch_cleaned(&self, html: &str) -> Result<String, CleanError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| CleanError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        let body = serde_json::json!({ "html": html }).to_string();
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CleanError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(CleanError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        // The body is the cleaned document itself, returned verbatim; the
        // caller treats it as opaque markup.
        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(CleanError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CleanError {
    if err.is_timeout() {
        return CleanError::new(FailureKind::Timeout, err.to_string());
    }
    CleanError::new(FailureKind::Network, err.to_string())
}
