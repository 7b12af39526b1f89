//! Data models and structures
//!
//! Defines the core data structures for design requests and the wire
//! format of the Stability image-to-image API.

use serde::{Deserialize, Serialize};

/// Room size used when the form omits the `room_size` field.
pub const DEFAULT_ROOM_SIZE: &str = "medium";

/// One design job: the uploaded room photo plus the style preferences
/// collected from the form. Created per HTTP call, discarded after the
/// response.
#[derive(Debug, Clone)]
pub struct DesignRequest {
    pub room_type: String,
    pub style: String,
    pub color_palette: String,
    pub room_size: String,
    pub image: Vec<u8>,
}

/// Result returned to the caller: the generated image, base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub image_base64: String,
}

// Stability API request/response models

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPrompt {
    pub text: String,
    pub weight: f32,
}

#[derive(Debug, Serialize)]
pub struct ImageToImageRequest {
    pub init_image: String,
    pub init_image_mode: String,
    pub image_strength: f32,
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: u32,
    pub height: u32,
    pub width: u32,
    pub samples: u32,
    pub steps: u32,
    pub seed: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Deserialize)]
pub struct Artifact {
    pub base64: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub stability_api_key: String,
    pub api_host: String,
    pub engine_id: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            stability_api_key: std::env::var("STABILITY_API_KEY")
                .map_err(|_| crate::Error::Config("STABILITY_API_KEY not set".to_string()))?,
            api_host: std::env::var("STABILITY_API_HOST")
                .unwrap_or_else(|_| "https://api.stability.ai".to_string()),
            engine_id: std::env::var("STABILITY_ENGINE_ID")
                .unwrap_or_else(|_| "stable-diffusion-v1-6".to_string()),
        })
    }
}
