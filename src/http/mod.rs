mod types;

pub(crate) use types::*;

use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Error, Result};

const API_KEY_HEADER: &str = "topos-api-key";
const USER_AGENT_VALUE: &str = concat!("rck-sdk/", env!("CARGO_PKG_VERSION"));

/// Internal HTTP transport shared by the compute kernel and the image
/// generator. Configuration is fixed at construction; the transport holds no
/// per-call state and is safe to share across tasks.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl HttpTransport {
    pub(crate) fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
        http: reqwest::Client,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::ApiKeyRequired);
        }

        Ok(Self {
            api_key,
            base_url,
            timeout,
            http,
        })
    }

    /// Sends an authenticated POST request and returns the decoded JSON object
    /// body. The configured timeout is applied per request, so a
    /// caller-supplied `reqwest::Client` is used as-is.
    pub(crate) async fn post(
        &self,
        endpoint: &str,
        payload: &impl Serialize,
    ) -> Result<Map<String, Value>> {
        let body = serde_json::to_vec(payload)?;
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT_VALUE)
            .body(body)
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(Error::Network)?;

        debug!("POST {} returned status {}", url, status);

        if status >= 400 {
            return Err(classify_error_response(status, &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Maps an HTTP error response onto the SDK error taxonomy. 401/403 become the
/// fixed authentication error without looking at the body; everything else
/// becomes an API error carrying whatever diagnostics the body provides.
fn classify_error_response(status_code: u16, body: &[u8]) -> Error {
    if status_code == 401 || status_code == 403 {
        return Error::Authentication;
    }

    match serde_json::from_slice::<Map<String, Value>>(body) {
        Ok(data) => {
            let message = data
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("API request failed")
                .to_string();
            Error::api_status(status_code, message, Some(Value::Object(data)))
        }
        Err(_) => Error::api_status(
            status_code,
            "API request failed with unparseable error response",
            None,
        ),
    }
}
