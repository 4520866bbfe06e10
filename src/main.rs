use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner_api::config::AppConfig;
use trip_planner_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let config = AppConfig::from_env().expect("provider API keys must be configured");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(config.clone()))
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
    })
    .bind((host, port))?
    .run()
    .await
}
