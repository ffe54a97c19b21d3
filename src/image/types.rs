use serde_json::{Map, Value};

use crate::{Error, Result};

/// Parameters for `Generator::generate`. All four fields are required.
#[derive(Debug, Clone, Default)]
pub struct GenerateParams {
    pub prompt: String,
    pub composition: String,
    pub lighting: String,
    pub style: String,
}

impl GenerateParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(Error::validation("prompt", "is required"));
        }
        if self.composition.is_empty() {
            return Err(Error::validation("composition", "is required"));
        }
        if self.lighting.is_empty() {
            return Err(Error::validation("lighting", "is required"));
        }
        if self.style.is_empty() {
            return Err(Error::validation("style", "is required"));
        }
        Ok(())
    }
}

/// Response for image generation calls.
#[derive(Debug, Clone)]
pub struct ImageResponse {
    pub images: Vec<ImageInfo>,
    pub count: u32,
    pub status: String,
    /// Decoded response body as received, kept for diagnostics.
    pub raw_data: Map<String, Value>,
}

impl ImageResponse {
    /// True when the request succeeded and at least one image was generated.
    pub fn success(&self) -> bool {
        self.status == "success" && self.count > 0
    }
}

/// A single generated image, referenced by URL or carried inline.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub url: String,
    /// Base64 encoded image bytes, when the service inlined them.
    pub image_data: String,
    pub index: u32,
    pub size: u64,
    pub mime_type: String,
}

impl ImageInfo {
    /// True when either a URL or inline data is available.
    pub fn has_data(&self) -> bool {
        !self.url.is_empty() || !self.image_data.is_empty()
    }
}
