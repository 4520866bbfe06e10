use serde::{Deserialize, Serialize};

/// One flight leg selection for a destination, in one direction. "No flights
/// found" is a valid terminal state that keeps the caller's budget untouched,
/// not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlightOffer {
    Found {
        depart_airport_code: String,
        destination_airport_code: String,
        is_direct: bool,
        flight_numbers: Vec<String>,
        total_duration: String,
        total_price: f64,
        remaining_budget: f64,
    },
    NotFound {
        remaining_budget: f64,
    },
}

impl FlightOffer {
    pub fn remaining_budget(&self) -> f64 {
        match self {
            FlightOffer::Found {
                remaining_budget, ..
            } => *remaining_budget,
            FlightOffer::NotFound { remaining_budget } => *remaining_budget,
        }
    }
}

/// The hotel pick for a destination. Selection maximizes spend within the
/// remaining budget rather than minimizing cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HotelOffer {
    Found {
        name: String,
        address: String,
        rating: f64,
        total_price: f64,
        remaining_budget: f64,
    },
    NotFound {
        remaining_budget: f64,
    },
}

impl HotelOffer {
    pub fn remaining_budget(&self) -> f64 {
        match self {
            HotelOffer::Found {
                remaining_budget, ..
            } => *remaining_budget,
            HotelOffer::NotFound { remaining_budget } => *remaining_budget,
        }
    }
}

/// Consolidated per-destination record: outbound flight fields, return-flight
/// numbers and duration (defaulted when no return match exists), and the
/// hotel pick. `remaining_budget` is always the hotel map's figure; the
/// outbound flight's own remaining budget is dropped during the merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItineraryOffer {
    pub depart_airport_code: Option<String>,
    pub destination_airport_code: Option<String>,
    pub is_direct: Option<bool>,
    pub flight_numbers: Vec<String>,
    pub total_duration: Option<String>,
    pub total_price: Option<f64>,
    pub return_flight_numbers: Vec<String>,
    pub return_total_duration: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_address: Option<String>,
    pub hotel_rating: Option<f64>,
    pub hotel_total_price: Option<f64>,
    pub remaining_budget: f64,
}
