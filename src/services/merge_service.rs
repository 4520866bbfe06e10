use std::collections::HashMap;

use crate::models::offer::{FlightOffer, HotelOffer, ItineraryOffer};

pub struct MergeService;

impl MergeService {
    /// Combine the outbound, hotel and return maps into one offer per
    /// destination. Keys are trimmed on both sides before lookup, so an
    /// outbound entry for "Paris " matches a hotel entry for "Paris". A
    /// destination without a hotel entry is dropped entirely; a missing
    /// return entry only defaults the return fields.
    pub fn merge(
        outbound: &HashMap<String, FlightOffer>,
        hotels: &HashMap<String, HotelOffer>,
        returns: &HashMap<String, FlightOffer>,
    ) -> HashMap<String, ItineraryOffer> {
        let hotels_by_name: HashMap<&str, &HotelOffer> =
            hotels.iter().map(|(name, offer)| (name.trim(), offer)).collect();
        let returns_by_name: HashMap<&str, &FlightOffer> =
            returns.iter().map(|(name, offer)| (name.trim(), offer)).collect();

        let mut merged = HashMap::new();
        for (name, flight) in outbound {
            let key = name.trim();
            let Some(hotel) = hotels_by_name.get(key).copied() else {
                continue;
            };
            let return_flight = returns_by_name.get(key).copied();
            merged.insert(key.to_string(), Self::combine(flight, return_flight, hotel));
        }
        merged
    }

    fn combine(
        flight: &FlightOffer,
        return_flight: Option<&FlightOffer>,
        hotel: &HotelOffer,
    ) -> ItineraryOffer {
        let mut offer = ItineraryOffer::default();

        if let FlightOffer::Found {
            depart_airport_code,
            destination_airport_code,
            is_direct,
            flight_numbers,
            total_duration,
            total_price,
            ..
        } = flight
        {
            offer.depart_airport_code = Some(depart_airport_code.clone());
            offer.destination_airport_code = Some(destination_airport_code.clone());
            offer.is_direct = Some(*is_direct);
            offer.flight_numbers = flight_numbers.clone();
            offer.total_duration = Some(total_duration.clone());
            offer.total_price = Some(*total_price);
        }

        if let Some(FlightOffer::Found {
            flight_numbers,
            total_duration,
            ..
        }) = return_flight
        {
            offer.return_flight_numbers = flight_numbers.clone();
            offer.return_total_duration = Some(total_duration.clone());
        }

        match hotel {
            HotelOffer::Found {
                name,
                address,
                rating,
                total_price,
                remaining_budget,
            } => {
                offer.hotel_name = Some(name.clone());
                offer.hotel_address = Some(address.clone());
                offer.hotel_rating = Some(*rating);
                offer.hotel_total_price = Some(*total_price);
                offer.remaining_budget = *remaining_budget;
            }
            HotelOffer::NotFound { remaining_budget } => {
                offer.remaining_budget = *remaining_budget;
            }
        }

        offer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(price: f64, remaining: f64) -> FlightOffer {
        FlightOffer::Found {
            depart_airport_code: "JFK".to_string(),
            destination_airport_code: "CDG".to_string(),
            is_direct: true,
            flight_numbers: vec!["AF 007".to_string()],
            total_duration: "07:20".to_string(),
            total_price: price,
            remaining_budget: remaining,
        }
    }

    fn hotel(price: f64, remaining: f64) -> HotelOffer {
        HotelOffer::Found {
            name: "Hotel du Centre".to_string(),
            address: "12 Rue de Rivoli".to_string(),
            rating: 4.3,
            total_price: price,
            remaining_budget: remaining,
        }
    }

    #[test]
    fn test_trimmed_names_merge() {
        let outbound = HashMap::from([("Paris ".to_string(), flight(900.0, 2100.0))]);
        let hotels = HashMap::from([("Paris".to_string(), hotel(2000.0, 100.0))]);
        let returns = HashMap::from([("Paris".to_string(), flight(900.0, 2100.0))]);

        let merged = MergeService::merge(&outbound, &hotels, &returns);
        assert_eq!(merged.len(), 1);
        assert!(merged.contains_key("Paris"));
    }

    #[test]
    fn test_missing_hotel_drops_destination() {
        let outbound = HashMap::from([("Oslo".to_string(), flight(700.0, 2300.0))]);
        let hotels = HashMap::new();
        let returns = HashMap::from([("Oslo".to_string(), flight(700.0, 2300.0))]);

        let merged = MergeService::merge(&outbound, &hotels, &returns);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_missing_return_defaults_fields() {
        let outbound = HashMap::from([("Tokyo".to_string(), flight(1200.0, 1800.0))]);
        let hotels = HashMap::from([("Tokyo".to_string(), hotel(1500.0, 300.0))]);
        let returns = HashMap::new();

        let merged = MergeService::merge(&outbound, &hotels, &returns);
        let offer = merged.get("Tokyo").expect("Tokyo must survive the merge");
        assert!(offer.return_flight_numbers.is_empty());
        assert!(offer.return_total_duration.is_none());
        assert_eq!(offer.total_price, Some(1200.0));
    }

    #[test]
    fn test_hotel_remaining_budget_supersedes_outbound() {
        let outbound = HashMap::from([("Lima".to_string(), flight(900.0, 2100.0))]);
        let hotels = HashMap::from([("Lima".to_string(), hotel(2000.0, 100.0))]);
        let returns = HashMap::from([("Lima".to_string(), flight(850.0, 2100.0))]);

        let merged = MergeService::merge(&outbound, &hotels, &returns);
        let offer = merged.get("Lima").unwrap();
        assert_eq!(offer.remaining_budget, 100.0);
        assert_eq!(offer.hotel_total_price, Some(2000.0));
    }

    #[test]
    fn test_empty_offers_still_merge() {
        let outbound = HashMap::from([(
            "Reykjavik".to_string(),
            FlightOffer::NotFound {
                remaining_budget: 3000.0,
            },
        )]);
        let hotels = HashMap::from([(
            "Reykjavik".to_string(),
            HotelOffer::NotFound {
                remaining_budget: 3000.0,
            },
        )]);
        let returns = HashMap::new();

        let merged = MergeService::merge(&outbound, &hotels, &returns);
        let offer = merged.get("Reykjavik").unwrap();
        assert!(offer.total_price.is_none());
        assert!(offer.hotel_name.is_none());
        assert_eq!(offer.remaining_budget, 3000.0);
    }

    #[test]
    fn test_return_fields_layered_onto_outbound() {
        let return_flight = FlightOffer::Found {
            depart_airport_code: "CDG".to_string(),
            destination_airport_code: "JFK".to_string(),
            is_direct: false,
            flight_numbers: vec!["AF 008".to_string(), "DL 263".to_string()],
            total_duration: "09:45".to_string(),
            total_price: 850.0,
            remaining_budget: 3000.0,
        };
        let outbound = HashMap::from([("Paris".to_string(), flight(900.0, 2100.0))]);
        let hotels = HashMap::from([("Paris".to_string(), hotel(2000.0, 100.0))]);
        let returns = HashMap::from([("Paris".to_string(), return_flight)]);

        let merged = MergeService::merge(&outbound, &hotels, &returns);
        let offer = merged.get("Paris").unwrap();
        assert_eq!(offer.return_flight_numbers, vec!["AF 008", "DL 263"]);
        assert_eq!(offer.return_total_duration.as_deref(), Some("09:45"));
        // Outbound identity is untouched by the return layer.
        assert_eq!(offer.flight_numbers, vec!["AF 007"]);
        assert_eq!(offer.total_duration.as_deref(), Some("07:20"));
    }
}
