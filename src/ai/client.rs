use super::ImageGenerationService;
use crate::models::{Config, GenerationResponse, ImageToImageRequest, TextPrompt};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Qualities the provider is steered away from, submitted at weight -1.
const NEGATIVE_PROMPT: &str = "blurry, low quality, distorted furniture, warped walls, \
     unrealistic proportions, oversaturated, cartoon, painting, illustration, text, \
     watermark, signature, people";

const IMAGE_STRENGTH: f32 = 0.35;
const CFG_SCALE: u32 = 7;
const OUTPUT_HEIGHT: u32 = 768;
const OUTPUT_WIDTH: u32 = 768;
const SAMPLES: u32 = 1;
const STEPS: u32 = 30;
// The provider treats seed 0 as "pick a random seed".
const SEED: u32 = 0;

pub struct StabilityClient {
    client: Client,
    api_key: String,
    base_url: String,
    engine_id: String,
}

impl StabilityClient {
    pub fn new(config: &Config) -> Self {
        Self::new_with_client(config, Client::new())
    }

    /// Construct with an externally provided HTTP client so connection
    /// pools can be shared.
    pub fn new_with_client(config: &Config, client: Client) -> Self {
        Self {
            client,
            api_key: config.stability_api_key.clone(),
            base_url: config.api_host.clone(),
            engine_id: config.engine_id.clone(),
        }
    }

    async fn image_to_image(&self, request: &ImageToImageRequest) -> Result<GenerationResponse> {
        let url = format!(
            "{}/v1/generation/{}/image-to-image",
            self.base_url, self.engine_id
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to generation API: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            tracing::error!("Generation API error (status {}): {}", status, body);
            return Err(Error::Upstream { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse generation API response: {}\nBody: {}", e, body);
            Error::Internal(format!("Failed to parse generation API response: {}", e))
        })
    }
}

#[async_trait]
impl ImageGenerationService for StabilityClient {
    async fn redesign(&self, init_image_b64: &str, prompt: &str) -> Result<String> {
        let request = ImageToImageRequest {
            init_image: init_image_b64.to_string(),
            init_image_mode: "IMAGE_STRENGTH".to_string(),
            image_strength: IMAGE_STRENGTH,
            text_prompts: vec![
                TextPrompt {
                    text: prompt.to_string(),
                    weight: 1.0,
                },
                TextPrompt {
                    text: NEGATIVE_PROMPT.to_string(),
                    weight: -1.0,
                },
            ],
            cfg_scale: CFG_SCALE,
            height: OUTPUT_HEIGHT,
            width: OUTPUT_WIDTH,
            samples: SAMPLES,
            steps: STEPS,
            seed: SEED,
        };

        let response = self.image_to_image(&request).await?;

        let artifact = response
            .artifacts
            .into_iter()
            .next()
            .ok_or(Error::UpstreamEmptyResult)?;

        Ok(artifact.base64)
    }
}
