//! Wire-level request and response models. Field names (including casing) are
//! the contract with the service and must not be "normalized".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for the `/compute/execute` endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ComputeRequest {
    pub start_point: ComputeStartPoint,
    pub path: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ComputeStartPoint {
    #[serde(rename = "startPoint")]
    pub start_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Vec<HashMap<String, String>>>,
}

/// Response envelope for the `/compute/execute` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ComputeEnvelope {
    pub end_point: Option<Map<String, Value>>,
}

/// Request body for the `/sd2is/render` endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ImageRequest {
    pub start_point: ImageStartPoint,
    pub path: ImagePath,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageStartPoint {
    #[serde(rename = "startPoint")]
    pub start_point: String,
}

/// The wire name for composition deliberately differs from the in-memory field
/// name; the service expects `frame_Composition` exactly.
#[derive(Debug, Serialize)]
pub(crate) struct ImagePath {
    #[serde(rename = "frame_Composition")]
    pub composition: String,
    pub lighting: String,
    pub style: String,
}

/// Response envelope for the `/sd2is/render` endpoint. Missing fields decode
/// to their zero values rather than failing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageEnvelope {
    #[serde(default)]
    pub end_point: ImageEndPoint,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageEndPoint {
    #[serde(default)]
    pub images: Vec<WireImage>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireImage {
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "imageData")]
    pub image_data: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default, rename = "mimeType")]
    pub mime_type: String,
}
