use std::collections::HashMap;
use std::env;

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let completion = check_key("completion API", &config.completion_api_key);
    health
        .services
        .insert("completion".to_string(), completion.clone());

    let travel_search = check_key("travel search API", &config.travel_search_api_key);
    health
        .services
        .insert("travel_search".to_string(), travel_search.clone());

    let image = check_key("image API", &config.image_api_key);
    health.services.insert("image".to_string(), image.clone());

    if completion.status != "ok" || travel_search.status != "ok" || image.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_key(label: &str, key: &str) -> ServiceStatus {
    if key.is_empty() {
        return ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("{} key not configured", label)),
        };
    }

    let masked_key = if key.len() > 8 {
        format!("{}***{}", &key[0..4], &key[key.len() - 4..])
    } else {
        "***".to_string()
    };

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!("{} key configured ({})", label, masked_key)),
    }
}
