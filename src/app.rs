//! Request orchestration: upload validation, prompt construction, and
//! the outbound generation call.

use crate::ai::{ImageGenerationService, StabilityClient};
use crate::models::{Config, DesignRequest, GeneratedImage};
use crate::{mime, prompt, Error, Result};
use base64::Engine as _;
use tracing::{debug, info};

/// Coordinates one design generation end to end.
pub struct App {
    image_gen: Box<dyn ImageGenerationService>,
}

impl App {
    /// Construct an app backed by the real generation provider.
    pub fn new(config: &Config) -> Self {
        Self::with_service(Box::new(StabilityClient::new(config)))
    }

    /// Build an app from a concrete service dependency.
    ///
    /// This is primarily useful for integration tests that need to
    /// inject a mock provider.
    pub fn with_service(image_gen: Box<dyn ImageGenerationService>) -> Self {
        Self { image_gen }
    }

    /// Run one design generation: validate the upload, build the
    /// prompt, call the provider, and wrap the first artifact.
    pub async fn generate_design(&self, request: DesignRequest) -> Result<GeneratedImage> {
        let mime = mime::detect_image_mime(&request.image).ok_or_else(|| {
            Error::InvalidInput("Uploaded file could not be read as an image".to_string())
        })?;
        debug!("Accepted {} upload ({} bytes)", mime, request.image.len());

        let prompt = prompt::build_prompt(
            &request.room_type,
            &request.style,
            &request.color_palette,
            &request.room_size,
        );
        info!("Built prompt ({} chars)", prompt.len());
        debug!("Prompt: {}", prompt);

        let init_image = base64::engine::general_purpose::STANDARD.encode(&request.image);

        let image_base64 = self.image_gen.redesign(&init_image, &prompt).await?;
        info!(
            "Received generated image ({} base64 chars)",
            image_base64.len()
        );

        Ok(GeneratedImage { image_base64 })
    }
}
