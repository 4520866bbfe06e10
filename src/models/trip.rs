use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::PlannerError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Constraints for one trip search. Built per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub trip_type: String,
}

impl TripRequest {
    pub fn new(
        start_date: String,
        end_date: String,
        budget: f64,
        trip_type: String,
    ) -> Result<Self, PlannerError> {
        if budget <= 0.0 {
            return Err(PlannerError::InvalidInput(
                "budget must be a positive amount".to_string(),
            ));
        }
        if trip_type.trim().is_empty() {
            return Err(PlannerError::InvalidInput(
                "vacation type must not be empty".to_string(),
            ));
        }

        let start = NaiveDate::parse_from_str(&start_date, DATE_FORMAT).map_err(|_| {
            PlannerError::InvalidInput(format!("start date '{}' is not a valid date", start_date))
        })?;
        let end = NaiveDate::parse_from_str(&end_date, DATE_FORMAT).map_err(|_| {
            PlannerError::InvalidInput(format!("return date '{}' is not a valid date", end_date))
        })?;
        if end < start {
            return Err(PlannerError::InvalidInput(
                "return date must not be before the start date".to_string(),
            ));
        }

        Ok(Self {
            start_date,
            end_date,
            budget,
            trip_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let trip = TripRequest::new(
            "2026-09-01".to_string(),
            "2026-09-10".to_string(),
            3000.0,
            "beach".to_string(),
        );
        assert!(trip.is_ok());
    }

    #[test]
    fn test_same_day_trip_allowed() {
        let trip = TripRequest::new(
            "2026-09-01".to_string(),
            "2026-09-01".to_string(),
            500.0,
            "city".to_string(),
        );
        assert!(trip.is_ok());
    }

    #[test]
    fn test_return_before_start_rejected() {
        let trip = TripRequest::new(
            "2026-09-10".to_string(),
            "2026-09-01".to_string(),
            3000.0,
            "beach".to_string(),
        );
        assert!(matches!(trip, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let trip = TripRequest::new(
            "2026-09-01".to_string(),
            "2026-09-10".to_string(),
            0.0,
            "beach".to_string(),
        );
        assert!(matches!(trip, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let trip = TripRequest::new(
            "September 1st".to_string(),
            "2026-09-10".to_string(),
            3000.0,
            "beach".to_string(),
        );
        assert!(matches!(trip, Err(PlannerError::InvalidInput(_))));
    }
}
