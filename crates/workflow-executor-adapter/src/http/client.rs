/*
[INPUT]:  HTTP configuration (backend base URL, timeouts)
[OUTPUT]: Configured reqwest client and the best-effort JSON POST primitive
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing submission behavior
*/

use crate::http::{ExecutorError, Result};
use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the executor backend.
///
/// One instance is built per run and reused for every request; its
/// connection pool is released when the value is dropped.
#[derive(Debug, Clone)]
pub struct ExecutorClient {
    http_client: Client,
    backend_url: String,
}

impl ExecutorClient {
    /// Create a new client with default configuration
    pub fn new(backend_url: &str) -> Result<Self> {
        Self::with_config(backend_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// The base URL is not validated here; a malformed one fails each
    /// request instead, like any other transport error.
    pub fn with_config(backend_url: &str, config: ClientConfig) -> Result<Self> {
        let backend_url = backend_url.trim().trim_end_matches('/');

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            backend_url: backend_url.to_string(),
        })
    }

    /// Base URL without a trailing slash
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Build full URL for a backend endpoint.
    ///
    /// Appends rather than joins, so a path prefix on the base URL is kept.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.backend_url, endpoint))?)
    }

    /// POST `payload` as JSON to `endpoint`.
    ///
    /// Never retries. The outcome is logged here (`debug` on success, `error`
    /// on failure) and also returned so the caller can decide what to do.
    pub async fn post_json<T>(&self, endpoint: &str, payload: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let target = format!("{}{}", self.backend_url, endpoint);
        match self.send_json(endpoint, payload).await {
            Ok(body) => {
                debug!("POST {} succeeded: {}", target, body);
                Ok(())
            }
            Err(err) => {
                error!("POST {} failed: {}", target, err);
                Err(err)
            }
        }
    }

    async fn send_json<T>(&self, endpoint: &str, payload: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        let response = self.http_client.post(url).json(payload).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ExecutorError::api_error(status, text));
        }
        Ok(text)
    }
}
