use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::config::AppConfig;
use crate::errors::PlannerError;
use crate::models::offer::ItineraryOffer;
use crate::models::trip::TripRequest;
use crate::services::completion_service::CompletionService;
use crate::services::merge_service::MergeService;
use crate::services::pricing_service::PricingService;

#[derive(serde::Deserialize)]
pub struct SearchOptionsParams {
    start_date: Option<String>,
    end_date: Option<String>,
    budget: Option<f64>,
    trip_type: Option<String>,
}

/*
    GET /search_options
*/
pub async fn search_options(
    config: web::Data<AppConfig>,
    params: web::Query<SearchOptionsParams>,
) -> impl Responder {
    let params = params.into_inner();
    let start_date = params.start_date.unwrap_or_default();
    let end_date = params.end_date.unwrap_or_default();
    let trip_type = params.trip_type.unwrap_or_default();
    let budget = params.budget.unwrap_or(0.0);

    if start_date.is_empty() || end_date.is_empty() || trip_type.is_empty() || budget <= 0.0 {
        return HttpResponse::BadRequest().json(json!({
            "detail": "start date, return date, budget and vacation type are required"
        }));
    }

    let trip = match TripRequest::new(start_date, end_date, budget, trip_type) {
        Ok(trip) => trip,
        Err(err) => return err.to_response(),
    };

    match run_search(&config, &trip).await {
        Ok(offers) => HttpResponse::Ok().json(json!({ "data": offers })),
        Err(err) => {
            eprintln!("Trip search failed: {}", err);
            err.to_response()
        }
    }
}

async fn run_search(
    config: &AppConfig,
    trip: &TripRequest,
) -> Result<HashMap<String, ItineraryOffer>, PlannerError> {
    let completion = CompletionService::new(config);
    let pricing = PricingService::new(config);

    let destinations = completion.suggest_destinations(trip).await?;
    let codes = pricing.resolve_airport_codes(&destinations).await?;

    // Outbound and return lookups are independent of each other; only the
    // hotel step needs the outbound remaining budgets.
    let (outbound, returns) = futures::join!(
        pricing.price_outbound(
            &destinations,
            &codes,
            &trip.start_date,
            &trip.end_date,
            trip.budget,
        ),
        pricing.price_return(&destinations, &codes, &trip.end_date, trip.budget),
    );
    let outbound = outbound?;
    let returns = returns?;

    let hotels = pricing
        .price_hotels(&outbound, &trip.start_date, &trip.end_date)
        .await?;

    Ok(MergeService::merge(&outbound, &hotels, &returns))
}
