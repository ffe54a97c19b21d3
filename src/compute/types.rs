use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Parameters for `Kernel::custom_compute`.
#[derive(Debug, Clone, Default)]
pub struct CustomComputeParams {
    pub text: String,
    pub task: String,
    /// Arbitrary JSON schema describing the expected output shape. When absent
    /// the service decides the shape on its own.
    pub output_schema: Option<Value>,
    /// Extra string fields merged into the request path object.
    pub custom_fields: HashMap<String, String>,
    /// Named resource attachments passed through to the service unmodified.
    pub resources: Vec<HashMap<String, String>>,
}

impl CustomComputeParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::validation("text", "is required"));
        }
        if self.task.is_empty() {
            return Err(Error::validation("task", "is required"));
        }
        Ok(())
    }
}

/// Parameters for `Kernel::analyze`.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeParams {
    pub text: String,
    pub task: String,
    /// Name of a predefined output format, e.g. "basic_analysis". For a custom
    /// schema use `custom_compute` instead.
    pub output_format: String,
    pub custom_fields: HashMap<String, String>,
}

impl AnalyzeParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::validation("text", "is required"));
        }
        if self.task.is_empty() {
            return Err(Error::validation("task", "is required"));
        }
        if self.output_format.is_empty() {
            return Err(Error::validation("output_format", "is required"));
        }
        Ok(())
    }
}

/// Parameters for `Kernel::translate`.
#[derive(Debug, Clone, Default)]
pub struct TranslateParams {
    pub text: String,
    pub target_language: String,
    pub include_cultural_notes: bool,
}

impl TranslateParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::validation("text", "is required"));
        }
        if self.target_language.is_empty() {
            return Err(Error::validation("target_language", "is required"));
        }
        Ok(())
    }
}

/// Response for all text computation calls. `data` is shaped by whatever
/// schema was requested.
#[derive(Debug, Clone)]
pub struct ComputeResponse {
    pub data: Map<String, Value>,
}

impl ComputeResponse {
    /// Decodes the response data into a caller-defined struct.
    ///
    /// ```rust,ignore
    /// #[derive(serde::Deserialize)]
    /// struct Analysis { emotion: String, theme: String, analysis: String }
    ///
    /// let analysis: Analysis = response.decode()?;
    /// ```
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::api("response data is empty"));
        }
        Ok(serde_json::from_value(Value::Object(self.data.clone()))?)
    }
}
