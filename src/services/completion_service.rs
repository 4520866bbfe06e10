use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::PlannerError;
use crate::models::trip::TripRequest;

const SUGGEST_INSTRUCTION: &str = "You are an experienced trip-planner agent. \
    You need to give a customer five destination options for a trip around the \
    world, based on the information the customer provided for you. Return only \
    the five destination names joined by underscores, with no digits.";

const AIRPORT_INSTRUCTION: &str = "You are an experienced trip-planner agent. \
    Return only the three-letter IATA code of the main international airport \
    serving the destination the customer names, with no other text.";

const PLAN_INSTRUCTION: &str = "You are an experienced trip-planner agent. \
    You need to give a customer a daily plan for their trip to a specific \
    location, based on the information the customer provided for you. Return a \
    string of the daily plan.";

const DESTINATION_DELIMITER: char = '_';

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatMessage>,
    model: &'a str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for the chat-completion provider. Backs the destination suggester,
/// the airport-code resolver and the daily planner.
#[derive(Clone)]
pub struct CompletionService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl CompletionService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.completion_api_key.clone(),
            base_url: config.completion_base_url.clone(),
            model: config.completion_model.clone(),
        }
    }

    pub async fn suggest_destinations(
        &self,
        trip: &TripRequest,
    ) -> Result<Vec<String>, PlannerError> {
        let prompt = format!(
            "I want to go on a {} trip. My overall budget is {}. I want to leave on {} and come back on {}. Can you give me five destination options?",
            trip.trip_type, trip.budget, trip.start_date, trip.end_date
        );
        let content = self.complete(SUGGEST_INSTRUCTION, prompt).await?;

        let destinations = parse_destinations(&content);
        if destinations.is_empty() {
            return Err(PlannerError::NoResultsFound(
                "the completion provider returned no destinations".to_string(),
            ));
        }
        Ok(destinations)
    }

    /// Resolve the airport code for a destination. The provider is asked for
    /// the bare code, so the trimmed raw text is the answer.
    pub async fn airport_code(&self, destination: &str) -> Result<String, PlannerError> {
        let prompt = format!(
            "Which airport should I fly into for a trip to {}?",
            destination
        );
        let content = self.complete(AIRPORT_INSTRUCTION, prompt).await?;
        Ok(content.trim().to_string())
    }

    pub async fn daily_plan(
        &self,
        destination: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<String, PlannerError> {
        let prompt = format!(
            "I am going to {} from {} to {}. Can you give me a daily plan for my trip?",
            destination, start_date, end_date
        );
        self.complete(PLAN_INSTRUCTION, prompt).await
    }

    async fn complete(&self, instruction: &str, prompt: String) -> Result<String, PlannerError> {
        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instruction.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            model: &self.model,
            temperature: 0.5,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            eprintln!("Completion request rejected with 401. Check the completion API key.");
            return Err(PlannerError::UpstreamUnavailable(
                "the completion provider rejected the configured API key".to_string(),
            ));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            eprintln!(
                "Completion request failed with status {}: {}",
                status, error_text
            );
            return Err(PlannerError::UpstreamUnavailable(format!(
                "completion request failed with status {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            PlannerError::UpstreamUnavailable(format!("failed to parse completion response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                PlannerError::UpstreamUnavailable(
                    "completion response contained no choices".to_string(),
                )
            })
    }
}

/// Split the suggester's delimited reply into destination names. The count is
/// not enforced; a short or long upstream reply flows through as-is.
pub fn parse_destinations(content: &str) -> Vec<String> {
    content
        .split(DESTINATION_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_destinations_splits_on_delimiter() {
        let parsed = parse_destinations("Paris_Tokyo_Oslo_Lima_Rome");
        assert_eq!(parsed, vec!["Paris", "Tokyo", "Oslo", "Lima", "Rome"]);
    }

    #[test]
    fn test_parse_destinations_trims_whitespace() {
        let parsed = parse_destinations(" Paris _ Tokyo _Oslo ");
        assert_eq!(parsed, vec!["Paris", "Tokyo", "Oslo"]);
    }

    #[test]
    fn test_parse_destinations_drops_empty_segments() {
        let parsed = parse_destinations("_Paris__Tokyo_");
        assert_eq!(parsed, vec!["Paris", "Tokyo"]);
    }

    #[test]
    fn test_parse_destinations_empty_reply() {
        assert!(parse_destinations("").is_empty());
        assert!(parse_destinations("  _ _ ").is_empty());
    }

    #[test]
    fn test_parse_destinations_does_not_enforce_count() {
        // A malformed upstream reply flows through with whatever size it has.
        let parsed = parse_destinations("Paris_Tokyo");
        assert_eq!(parsed.len(), 2);
    }
}
