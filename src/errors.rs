use std::error::Error;
use std::fmt;

use actix_web::HttpResponse;
use serde_json::json;

/// Error kinds surfaced by the planning pipeline. Absence of matching results
/// (no flights, no hotel under budget) is modeled as an empty offer in the
/// data itself and never reaches this enum.
#[derive(Debug)]
pub enum PlannerError {
    InvalidInput(String),
    UpstreamUnavailable(String),
    NoResultsFound(String),
    ImageGenerationPartialFailure { failed: usize, total: usize },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PlannerError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            PlannerError::NoResultsFound(msg) => write!(f, "No results found: {}", msg),
            PlannerError::ImageGenerationPartialFailure { failed, total } => {
                write!(f, "Image generation failed for {} of {} requests", failed, total)
            }
        }
    }
}

impl Error for PlannerError {}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::UpstreamUnavailable(err.to_string())
    }
}

impl PlannerError {
    /// Map an error kind onto the wire shapes the frontend expects:
    /// `{detail}` for rejected input, `{error}` for everything upstream.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            PlannerError::InvalidInput(msg) => {
                HttpResponse::BadRequest().json(json!({ "detail": msg }))
            }
            PlannerError::NoResultsFound(_) => {
                HttpResponse::NotFound().json(json!({ "error": self.to_string() }))
            }
            PlannerError::UpstreamUnavailable(_)
            | PlannerError::ImageGenerationPartialFailure { .. } => {
                HttpResponse::BadGateway().json(json!({ "error": self.to_string() }))
            }
        }
    }
}
