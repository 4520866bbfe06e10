use std::env;

use crate::errors::PlannerError;

const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TRAVEL_SEARCH_BASE_URL: &str = "https://serpapi.com";
const DEFAULT_IMAGE_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_HOME_AIRPORT: &str = "JFK";

/// Provider credentials and endpoints, read once in `main` and handed to each
/// service at construction. Base URLs are overridable so tests can point the
/// clients at a local double.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub completion_api_key: String,
    pub travel_search_api_key: String,
    pub image_api_key: String,
    pub completion_model: String,
    pub home_airport: String,
    pub completion_base_url: String,
    pub travel_search_base_url: String,
    pub image_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, PlannerError> {
        let completion_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| PlannerError::InvalidInput("OPENAI_API_KEY not set".to_string()))?;

        let travel_search_api_key = env::var("SERPAPI_API_KEY")
            .map_err(|_| PlannerError::InvalidInput("SERPAPI_API_KEY not set".to_string()))?;

        // The image provider can run on its own key; it falls back to the
        // completion key when a dedicated one is not configured.
        let image_api_key =
            env::var("OPENAI_IMAGE_API_KEY").unwrap_or_else(|_| completion_api_key.clone());

        Ok(Self {
            completion_api_key,
            travel_search_api_key,
            image_api_key,
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            home_airport: env::var("HOME_AIRPORT")
                .unwrap_or_else(|_| DEFAULT_HOME_AIRPORT.to_string()),
            completion_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_BASE_URL.to_string()),
            travel_search_base_url: env::var("SERPAPI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TRAVEL_SEARCH_BASE_URL.to_string()),
            image_base_url: env::var("OPENAI_IMAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "OPENAI_API_KEY",
            "SERPAPI_API_KEY",
            "OPENAI_IMAGE_API_KEY",
            "COMPLETION_MODEL",
            "HOME_AIRPORT",
            "OPENAI_BASE_URL",
            "SERPAPI_BASE_URL",
            "OPENAI_IMAGE_BASE_URL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_keys() {
        clear_env();
        assert!(AppConfig::from_env().is_err());

        env::set_var("OPENAI_API_KEY", "sk-test");
        assert!(AppConfig::from_env().is_err());

        env::set_var("SERPAPI_API_KEY", "serp-test");
        let config = AppConfig::from_env().expect("both keys set");
        assert_eq!(config.completion_api_key, "sk-test");
        assert_eq!(config.travel_search_api_key, "serp-test");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_image_key_falls_back_to_completion_key() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("SERPAPI_API_KEY", "serp-test");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.image_api_key, "sk-test");

        env::set_var("OPENAI_IMAGE_API_KEY", "sk-image");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.image_api_key, "sk-image");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("SERPAPI_API_KEY", "serp-test");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.completion_model, "gpt-3.5-turbo");
        assert_eq!(config.home_airport, "JFK");
        assert_eq!(config.completion_base_url, "https://api.openai.com");
        assert_eq!(config.travel_search_base_url, "https://serpapi.com");
        clear_env();
    }
}
