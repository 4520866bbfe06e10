use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::config::AppConfig;
use crate::services::completion_service::CompletionService;

#[derive(serde::Deserialize)]
pub struct DailyPlanParams {
    destination: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

/*
    GET /chosen_destination_daily_plan
*/
pub async fn chosen_destination_daily_plan(
    config: web::Data<AppConfig>,
    params: web::Query<DailyPlanParams>,
) -> impl Responder {
    let params = params.into_inner();
    let destination = params.destination.unwrap_or_default();
    let start_date = params.start_date.unwrap_or_default();
    let end_date = params.end_date.unwrap_or_default();

    if destination.is_empty() || start_date.is_empty() || end_date.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "detail": "destination, start date and return date are required"
        }));
    }

    let completion = CompletionService::new(&config);
    match completion
        .daily_plan(&destination, &start_date, &end_date)
        .await
    {
        Ok(plan) => HttpResponse::Ok().json(json!({ "data": plan })),
        Err(err) => {
            eprintln!("Daily plan request failed: {}", err);
            err.to_response()
        }
    }
}
