use reqwest::Client;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::PlannerError;

const FLIGHTS_ENGINE: &str = "google_flights";
const HOTELS_ENGINE: &str = "google_hotels";
const CURRENCY: &str = "USD";

// Search type values the flights engine expects.
const TRIP_ROUND: &str = "1";
const TRIP_ONE_WAY: &str = "2";

#[derive(Debug, Deserialize)]
struct FlightSearchResponse {
    #[serde(default)]
    best_flights: Vec<FlightOption>,
    #[serde(default)]
    other_flights: Vec<FlightOption>,
}

/// One priced itinerary option returned by the flights engine.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOption {
    #[serde(default)]
    pub flights: Vec<FlightLeg>,
    #[serde(default)]
    pub layovers: Vec<Layover>,
    /// Total travel time in minutes.
    #[serde(default)]
    pub total_duration: u32,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightLeg {
    pub flight_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layover {
    pub name: Option<String>,
    pub duration: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct HotelSearchResponse {
    #[serde(default)]
    properties: Vec<HotelProperty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub total_rate: Option<HotelRate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelRate {
    pub extracted_lowest: Option<f64>,
}

impl HotelProperty {
    pub fn total_price(&self) -> Option<f64> {
        self.total_rate.as_ref().and_then(|rate| rate.extracted_lowest)
    }
}

/// Client for the travel-search provider's flight and hotel engines. Transport
/// and parse failures propagate as typed errors; an empty result list is a
/// normal value and is handled downstream as an empty offer.
#[derive(Clone)]
pub struct TravelSearchService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TravelSearchService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.travel_search_api_key.clone(),
            base_url: config.travel_search_base_url.clone(),
        }
    }

    /// Search flight options between two airports. A `return_date` makes it a
    /// round trip; without one the search is one-way.
    pub async fn search_flights(
        &self,
        departure_id: &str,
        arrival_id: &str,
        outbound_date: &str,
        return_date: Option<&str>,
        max_price: f64,
    ) -> Result<Vec<FlightOption>, PlannerError> {
        let trip_type = if return_date.is_some() {
            TRIP_ROUND
        } else {
            TRIP_ONE_WAY
        };
        let max_price = format!("{}", max_price.round() as i64);

        let mut params = vec![
            ("engine", FLIGHTS_ENGINE),
            ("departure_id", departure_id),
            ("arrival_id", arrival_id),
            ("outbound_date", outbound_date),
            ("type", trip_type),
            ("currency", CURRENCY),
            ("hl", "en"),
            ("max_price", max_price.as_str()),
            ("api_key", self.api_key.as_str()),
        ];
        if let Some(date) = return_date {
            params.push(("return_date", date));
        }

        let response: FlightSearchResponse = self.get_json(&params).await?;

        let mut options = response.best_flights;
        options.extend(response.other_flights);
        Ok(options)
    }

    /// Search lodging for a destination, capped at the given price ceiling.
    pub async fn search_hotels(
        &self,
        query: &str,
        check_in_date: &str,
        check_out_date: &str,
        max_price: f64,
    ) -> Result<Vec<HotelProperty>, PlannerError> {
        let max_price = format!("{}", max_price.round() as i64);
        let params = vec![
            ("engine", HOTELS_ENGINE),
            ("q", query),
            ("check_in_date", check_in_date),
            ("check_out_date", check_out_date),
            ("currency", CURRENCY),
            ("hl", "en"),
            ("max_price", max_price.as_str()),
            ("api_key", self.api_key.as_str()),
        ];

        let response: HotelSearchResponse = self.get_json(&params).await?;
        Ok(response.properties)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, PlannerError> {
        let url = format!("{}/search", self.base_url);
        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            eprintln!(
                "Travel search request failed with status {}: {}",
                status, error_text
            );
            return Err(PlannerError::UpstreamUnavailable(format!(
                "travel search request failed with status {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            PlannerError::UpstreamUnavailable(format!(
                "failed to parse travel search response: {}",
                e
            ))
        })
    }
}
