mod schema;
mod types;

pub use schema::predefined_schema;
pub use types::*;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::http::{ComputeEnvelope, ComputeRequest, ComputeStartPoint, HttpTransport};
use crate::{Error, Result};

const COMPUTE_ENDPOINT: &str = "/compute/execute";

/// Entry point for RCK text computation. Constructed by `Client`; not normally
/// created directly.
#[derive(Debug, Clone)]
pub struct Kernel {
    transport: Arc<HttpTransport>,
}

impl Kernel {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Executes a fully customized computation task with an arbitrary output
    /// schema.
    pub async fn custom_compute(&self, params: CustomComputeParams) -> Result<ComputeResponse> {
        params.validate()?;

        let payload = build_compute_payload(
            &params.text,
            &params.task,
            params.output_schema.as_ref(),
            &params.custom_fields,
            &params.resources,
        )?;

        self.execute(payload).await
    }

    /// Runs a text analysis task against a predefined output format.
    pub async fn analyze(&self, params: AnalyzeParams) -> Result<ComputeResponse> {
        params.validate()?;

        let schema = predefined_schema(&params.output_format).map_err(|e| {
            Error::validation(
                "output_format",
                format!("invalid predefined schema name: {e}"),
            )
        })?;

        let payload = build_compute_payload(
            &params.text,
            &params.task,
            Some(&schema),
            &params.custom_fields,
            &[],
        )?;

        self.execute(payload).await
    }

    /// Translates text into a target language, optionally asking for cultural
    /// background notes.
    pub async fn translate(&self, params: TranslateParams) -> Result<ComputeResponse> {
        params.validate()?;

        let task = translation_task(&params.target_language, params.include_cultural_notes);
        let schema = predefined_schema("translation")?;

        let custom_fields = HashMap::from([
            (
                "target_language".to_string(),
                params.target_language.clone(),
            ),
            (
                "include_cultural_notes".to_string(),
                params.include_cultural_notes.to_string(),
            ),
        ]);

        let payload =
            build_compute_payload(&params.text, &task, Some(&schema), &custom_fields, &[])?;

        self.execute(payload).await
    }

    async fn execute(&self, payload: ComputeRequest) -> Result<ComputeResponse> {
        debug!("dispatching compute request to {}", COMPUTE_ENDPOINT);

        let raw = self.transport.post(COMPUTE_ENDPOINT, &payload).await?;

        let envelope: ComputeEnvelope = serde_json::from_value(Value::Object(raw))
            .map_err(|e| Error::api(format!("failed to parse API response: {e}")))?;

        let data = envelope
            .end_point
            .ok_or_else(|| Error::api("API response missing 'end_point' field"))?;

        Ok(ComputeResponse { data })
    }
}

fn translation_task(target_language: &str, include_cultural_notes: bool) -> String {
    if include_cultural_notes {
        format!("Translate text to {target_language} and provide cultural background notes")
    } else {
        format!("Translate text to {target_language}")
    }
}

/// Assembles the wire payload shared by all compute entry points. The schema
/// travels as a JSON string under `endpointClass`; custom fields are merged in
/// last, so a colliding key wins over the fixed ones.
fn build_compute_payload(
    text: &str,
    task: &str,
    schema: Option<&Value>,
    custom_fields: &HashMap<String, String>,
    resources: &[HashMap<String, String>],
) -> Result<ComputeRequest> {
    let mut path = Map::new();
    path.insert("expectPath".to_string(), Value::String(task.to_string()));

    if let Some(schema) = schema {
        path.insert(
            "endpointClass".to_string(),
            Value::String(serde_json::to_string(schema)?),
        );
    }

    for (key, value) in custom_fields {
        path.insert(key.clone(), Value::String(value.clone()));
    }

    Ok(ComputeRequest {
        start_point: ComputeStartPoint {
            start_point: text.to_string(),
            resource: if resources.is_empty() {
                None
            } else {
                Some(resources.to_vec())
            },
        },
        path,
    })
}
