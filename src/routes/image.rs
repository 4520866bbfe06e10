use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::config::AppConfig;
use crate::services::image_service::{ImageService, IMAGE_COUNT};

#[derive(serde::Deserialize)]
pub struct DalleImageParams {
    destination: Option<String>,
    daily_plan: Option<String>,
}

/*
    GET /dalle_image
*/
pub async fn dalle_image(
    config: web::Data<AppConfig>,
    params: web::Query<DalleImageParams>,
) -> impl Responder {
    let params = params.into_inner();
    let destination = params.destination.unwrap_or_default();
    let daily_plan = params.daily_plan.unwrap_or_default();

    if destination.is_empty() || daily_plan.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "detail": "destination and daily plan are required"
        }));
    }

    let images = ImageService::new(&config);
    match images
        .illustrate(&destination, &daily_plan, IMAGE_COUNT)
        .await
    {
        Ok(urls) => HttpResponse::Ok().json(json!({ "data": urls })),
        Err(err) => {
            eprintln!("Image generation failed: {}", err);
            err.to_response()
        }
    }
}
