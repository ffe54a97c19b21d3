mod types;

pub use types::*;

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::http::{HttpTransport, ImageEnvelope, ImagePath, ImageRequest, ImageStartPoint};
use crate::{Error, Result};

const IMAGE_ENDPOINT: &str = "/sd2is/render";

/// Entry point for RCK image generation. Constructed by `Client`; not normally
/// created directly.
#[derive(Debug, Clone)]
pub struct Generator {
    transport: Arc<HttpTransport>,
}

impl Generator {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Generates images from a prompt and three style descriptors.
    pub async fn generate(&self, params: GenerateParams) -> Result<ImageResponse> {
        params.validate()?;

        let payload = ImageRequest {
            start_point: ImageStartPoint {
                start_point: params.prompt,
            },
            path: ImagePath {
                composition: params.composition,
                lighting: params.lighting,
                style: params.style,
            },
        };

        debug!("dispatching image request to {}", IMAGE_ENDPOINT);

        let raw = self.transport.post(IMAGE_ENDPOINT, &payload).await?;

        let envelope: ImageEnvelope = serde_json::from_value(Value::Object(raw.clone()))
            .map_err(|_| Error::api("failed to parse API response into ImageResponse"))?;

        let end_point = envelope.end_point;
        let images = end_point
            .images
            .into_iter()
            .map(|img| ImageInfo {
                url: img.url,
                image_data: img.image_data,
                index: img.index,
                size: img.size,
                mime_type: img.mime_type,
            })
            .collect();

        Ok(ImageResponse {
            images,
            count: end_point.count,
            status: end_point.status,
            raw_data: raw,
        })
    }
}
