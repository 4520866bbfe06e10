use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use trip_planner_api::config::AppConfig;
use trip_planner_api::routes;

/// Config pointing every provider at a port that is never bound, so upstream
/// calls fail fast with a connection error instead of reaching the network.
pub fn test_config() -> AppConfig {
    AppConfig {
        completion_api_key: "sk-test-key-0000".to_string(),
        travel_search_api_key: "serp-test-key-0000".to_string(),
        image_api_key: "sk-image-key-0000".to_string(),
        completion_model: "gpt-3.5-turbo".to_string(),
        home_airport: "JFK".to_string(),
        completion_base_url: "http://127.0.0.1:1".to_string(),
        travel_search_base_url: "http://127.0.0.1:1".to_string(),
        image_base_url: "http://127.0.0.1:1".to_string(),
    }
}

pub fn create_app(
    config: AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(config))
        .wrap(Cors::permissive())
        .wrap(Logger::default())
        .route("/health", web::get().to(routes::health::health_check))
        .route(
            "/search_options",
            web::get().to(routes::search::search_options),
        )
        .route(
            "/chosen_destination_daily_plan",
            web::get().to(routes::daily_plan::chosen_destination_daily_plan),
        )
        .route("/dalle_image", web::get().to(routes::image::dalle_image))
}
