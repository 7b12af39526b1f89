//! AI service integration for image-to-image generation
//!
//! Provides the interface to the Stability image-to-image API used to
//! restyle uploaded room photos.

pub mod client;
pub mod mock;

pub use client::StabilityClient;
pub use mock::MockGenerationClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate a redesigned image from a base64-encoded source image
    /// and a scene prompt. Returns the base64-encoded result.
    async fn redesign(&self, init_image_b64: &str, prompt: &str) -> Result<String>;
}
