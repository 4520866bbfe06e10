use std::cmp::Ordering;
use std::collections::HashMap;

use futures::future::join_all;

use crate::config::AppConfig;
use crate::errors::PlannerError;
use crate::models::offer::{FlightOffer, HotelOffer};
use crate::services::completion_service::CompletionService;
use crate::services::travel_search_service::{FlightOption, HotelProperty, TravelSearchService};

/// Prices candidate destinations: cheapest outbound flight, cheapest return
/// flight, and the most expensive hotel still inside the remaining budget.
/// Per-destination lookups are independent and fan out concurrently; the maps
/// are assembled once every lookup has finished.
pub struct PricingService {
    completion: CompletionService,
    travel: TravelSearchService,
    home_airport: String,
}

impl PricingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            completion: CompletionService::new(config),
            travel: TravelSearchService::new(config),
            home_airport: config.home_airport.clone(),
        }
    }

    /// Resolve each destination's airport code once; the outbound and return
    /// legs share the result.
    pub async fn resolve_airport_codes(
        &self,
        destinations: &[String],
    ) -> Result<HashMap<String, String>, PlannerError> {
        let lookups = destinations.iter().map(|name| async move {
            let code = self.completion.airport_code(name).await?;
            Ok::<_, PlannerError>((name.clone(), code))
        });

        join_all(lookups).await.into_iter().collect()
    }

    pub async fn price_outbound(
        &self,
        destinations: &[String],
        codes: &HashMap<String, String>,
        start_date: &str,
        end_date: &str,
        budget: f64,
    ) -> Result<HashMap<String, FlightOffer>, PlannerError> {
        let lookups = destinations.iter().map(|name| {
            let code = codes.get(name).cloned();
            async move {
                let offer = match code {
                    Some(code) => {
                        let options = self
                            .travel
                            .search_flights(
                                &self.home_airport,
                                &code,
                                start_date,
                                Some(end_date),
                                budget,
                            )
                            .await?;
                        Self::outbound_offer(&options, &self.home_airport, &code, budget)
                    }
                    None => FlightOffer::NotFound {
                        remaining_budget: budget,
                    },
                };
                Ok::<_, PlannerError>((name.clone(), offer))
            }
        });

        join_all(lookups).await.into_iter().collect()
    }

    pub async fn price_return(
        &self,
        destinations: &[String],
        codes: &HashMap<String, String>,
        end_date: &str,
        budget: f64,
    ) -> Result<HashMap<String, FlightOffer>, PlannerError> {
        let lookups = destinations.iter().map(|name| {
            let code = codes.get(name).cloned();
            async move {
                let offer = match code {
                    Some(code) => {
                        let options = self
                            .travel
                            .search_flights(&code, &self.home_airport, end_date, None, budget)
                            .await?;
                        Self::return_offer(&options, &code, &self.home_airport, budget)
                    }
                    None => FlightOffer::NotFound {
                        remaining_budget: budget,
                    },
                };
                Ok::<_, PlannerError>((name.clone(), offer))
            }
        });

        join_all(lookups).await.into_iter().collect()
    }

    /// Pick a hotel for every destination in the flight map, capped by that
    /// destination's remaining budget after the outbound flight.
    pub async fn price_hotels(
        &self,
        flights: &HashMap<String, FlightOffer>,
        check_in_date: &str,
        check_out_date: &str,
    ) -> Result<HashMap<String, HotelOffer>, PlannerError> {
        let lookups = flights.iter().map(|(name, flight)| {
            let remaining = flight.remaining_budget();
            let query = format!("{} hotels", name.trim());
            async move {
                let properties = self
                    .travel
                    .search_hotels(&query, check_in_date, check_out_date, remaining)
                    .await?;
                Ok::<_, PlannerError>((name.clone(), Self::hotel_offer(&properties, remaining)))
            }
        });

        join_all(lookups).await.into_iter().collect()
    }

    /// Strict minimum by total price; the first minimum wins ties. Options
    /// without a price are never selected.
    pub fn cheapest_option(options: &[FlightOption]) -> Option<&FlightOption> {
        options
            .iter()
            .filter(|option| option.price.is_some())
            .min_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal))
    }

    /// Most expensive property at or under the budget ceiling. Spend within
    /// budget is maximized, not minimized.
    pub fn most_expensive_within(
        properties: &[HotelProperty],
        budget: f64,
    ) -> Option<&HotelProperty> {
        properties
            .iter()
            .filter(|property| {
                property
                    .total_price()
                    .map_or(false, |price| price <= budget)
            })
            .max_by(|a, b| {
                a.total_price()
                    .partial_cmp(&b.total_price())
                    .unwrap_or(Ordering::Equal)
            })
    }

    pub fn outbound_offer(
        options: &[FlightOption],
        depart: &str,
        arrival: &str,
        budget: f64,
    ) -> FlightOffer {
        match Self::cheapest_option(options) {
            Some(option) => {
                let price = option.price.unwrap_or(0.0);
                Self::offer_from_option(option, depart, arrival, price, budget - price)
            }
            None => FlightOffer::NotFound {
                remaining_budget: budget,
            },
        }
    }

    /// The return leg records price, duration and flight numbers but does not
    /// deduct anything further from the budget.
    pub fn return_offer(
        options: &[FlightOption],
        depart: &str,
        arrival: &str,
        budget: f64,
    ) -> FlightOffer {
        match Self::cheapest_option(options) {
            Some(option) => {
                let price = option.price.unwrap_or(0.0);
                Self::offer_from_option(option, depart, arrival, price, budget)
            }
            None => FlightOffer::NotFound {
                remaining_budget: budget,
            },
        }
    }

    pub fn hotel_offer(properties: &[HotelProperty], remaining_budget: f64) -> HotelOffer {
        match Self::most_expensive_within(properties, remaining_budget) {
            Some(property) => {
                let price = property.total_price().unwrap_or(0.0);
                HotelOffer::Found {
                    name: property.name.clone().unwrap_or_default(),
                    address: property.address.clone().unwrap_or_default(),
                    rating: property.rating.unwrap_or(0.0),
                    total_price: price,
                    remaining_budget: remaining_budget - price,
                }
            }
            None => HotelOffer::NotFound { remaining_budget },
        }
    }

    fn offer_from_option(
        option: &FlightOption,
        depart: &str,
        arrival: &str,
        price: f64,
        remaining_budget: f64,
    ) -> FlightOffer {
        FlightOffer::Found {
            depart_airport_code: depart.to_string(),
            destination_airport_code: arrival.to_string(),
            is_direct: option.layovers.is_empty(),
            flight_numbers: option
                .flights
                .iter()
                .filter_map(|leg| leg.flight_number.clone())
                .collect(),
            total_duration: Self::format_duration(option.total_duration),
            total_price: price,
            remaining_budget,
        }
    }

    /// Minutes to HH:MM.
    pub fn format_duration(minutes: u32) -> String {
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}
