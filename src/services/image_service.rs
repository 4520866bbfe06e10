use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::PlannerError;

pub const IMAGE_COUNT: usize = 4;

const IMAGE_MODEL: &str = "dall-e-3";
const IMAGE_SIZE: &str = "1024x1024";

// The image provider caps prompt length, so only a slice of the plan text is
// embedded in the prompt.
const MAX_PLAN_CHARS: usize = 800;

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: String,
}

/// Client for the image-generation provider. Requests are issued one at a
/// time and a failed request becomes an in-band error string in the batch, so
/// a partial batch is a valid result.
#[derive(Clone)]
pub struct ImageService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ImageService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.image_api_key.clone(),
            base_url: config.image_base_url.clone(),
        }
    }

    pub async fn illustrate(
        &self,
        destination: &str,
        daily_plan: &str,
        count: usize,
    ) -> Result<Vec<String>, PlannerError> {
        let prompt = build_prompt(destination, daily_plan);

        let mut results = Vec::with_capacity(count);
        let mut failed = 0;
        for _ in 0..count {
            match self.generate_single(&prompt).await {
                Ok(url) => results.push(url),
                Err(e) => {
                    eprintln!("Failed to generate image: {}", e);
                    failed += 1;
                    results.push(format!("error: {}", e));
                }
            }
        }

        if failed == count {
            return Err(PlannerError::UpstreamUnavailable(
                "every image generation request failed".to_string(),
            ));
        }
        if failed > 0 {
            eprintln!(
                "{}",
                PlannerError::ImageGenerationPartialFailure {
                    failed,
                    total: count,
                }
            );
        }

        Ok(results)
    }

    async fn generate_single(&self, prompt: &str) -> Result<String, PlannerError> {
        let request = ImageGenerationRequest {
            model: IMAGE_MODEL,
            prompt,
            n: 1,
            size: IMAGE_SIZE,
        };

        let url = format!("{}/v1/images/generations", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            eprintln!(
                "Image generation request failed with status {}: {}",
                status, error_text
            );
            return Err(PlannerError::UpstreamUnavailable(format!(
                "image generation request failed with status {}",
                status
            )));
        }

        let generated: ImageGenerationResponse = response.json().await.map_err(|e| {
            PlannerError::UpstreamUnavailable(format!(
                "failed to parse image generation response: {}",
                e
            ))
        })?;

        generated
            .data
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| {
                PlannerError::UpstreamUnavailable(
                    "image generation response contained no images".to_string(),
                )
            })
    }
}

pub fn build_prompt(destination: &str, daily_plan: &str) -> String {
    format!(
        "A photorealistic travel photograph of {}, inspired by this trip plan: {}",
        destination,
        truncate_plan(daily_plan)
    )
}

fn truncate_plan(plan: &str) -> &str {
    match plan.char_indices().nth(MAX_PLAN_CHARS) {
        Some((index, _)) => &plan[..index],
        None => plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_destination() {
        let prompt = build_prompt("Kyoto", "Day 1: temples.");
        assert!(prompt.contains("Kyoto"));
        assert!(prompt.contains("Day 1: temples."));
    }

    #[test]
    fn test_short_plan_not_truncated() {
        assert_eq!(truncate_plan("short plan"), "short plan");
    }

    #[test]
    fn test_long_plan_truncated_to_limit() {
        let plan = "x".repeat(MAX_PLAN_CHARS + 100);
        assert_eq!(truncate_plan(&plan).chars().count(), MAX_PLAN_CHARS);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let plan = "é".repeat(MAX_PLAN_CHARS + 10);
        let truncated = truncate_plan(&plan);
        assert_eq!(truncated.chars().count(), MAX_PLAN_CHARS);
    }
}
