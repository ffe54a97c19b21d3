use std::sync::Arc;
use std::time::Duration;

use crate::http::HttpTransport;
use crate::{Error, Result, compute, image};

const DEFAULT_BASE_URL: &str = "https://relatioe-kernel-zdibtqjzxm.us-west-1.fcapp.run";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Main client for the RCK API. Holds no per-call state, so a single instance
/// can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Client {
    /// Text computation operations.
    pub compute: compute::Kernel,
    /// Image generation operations.
    pub image: image::Generator,
}

impl Client {
    /// Creates a client with default settings. Fails when the API key is
    /// empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Starts building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Verifies the API key and network connectivity by executing a minimal
    /// analysis request.
    pub async fn test_connection(&self) -> Result<()> {
        self.compute
            .analyze(compute::AnalyzeParams {
                text: "test".to_string(),
                task: "simple analysis".to_string(),
                output_format: "basic_analysis".to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| Error::ConnectionTest(Box::new(e)))?;

        Ok(())
    }
}

/// Builder for `Client`. Everything except the API key has a default.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Overrides the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout (default 60 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supplies a custom `reqwest::Client`, e.g. for proxies or custom TLS.
    /// The configured timeout is still applied per request.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> Result<Client> {
        let transport = Arc::new(HttpTransport::new(
            self.api_key,
            self.base_url,
            self.timeout,
            self.http_client.unwrap_or_default(),
        )?);

        Ok(Client {
            compute: compute::Kernel::new(Arc::clone(&transport)),
            image: image::Generator::new(transport),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(Client::new(""), Err(Error::ApiKeyRequired)));
        assert!(matches!(
            Client::builder("").base_url("http://localhost").build(),
            Err(Error::ApiKeyRequired)
        ));
    }

    #[test]
    fn builder_accepts_overrides() {
        let client = Client::builder("key")
            .base_url("http://localhost:9999")
            .timeout(Duration::from_secs(5))
            .http_client(reqwest::Client::new())
            .build();
        assert!(client.is_ok());
    }
}
