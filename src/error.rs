use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// All errors returned by the SDK. Callers can match on the variant instead of
/// parsing messages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API key is required")]
    ApiKeyRequired,

    #[error("authentication failed, please check API key")]
    Authentication,

    #[error("validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("unknown schema name: {0}")]
    UnknownSchema(String),

    #[error("API error: {message}{}", .status_code.map(|c| format!(" (status code: {c})")).unwrap_or_default())]
    Api {
        message: String,
        status_code: Option<u16>,
        /// Raw error body from the API response, when it was parseable.
        response_data: Option<Value>,
    },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("connection test failed: {0}")]
    ConnectionTest(#[source] Box<Error>),
}

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api {
            message: msg.into(),
            status_code: None,
            response_data: None,
        }
    }

    pub fn api_status(
        status_code: u16,
        msg: impl Into<String>,
        response_data: Option<Value>,
    ) -> Self {
        Self::Api {
            message: msg.into(),
            status_code: Some(status_code),
            response_data,
        }
    }
}
