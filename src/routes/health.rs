use actix_web::{web, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::AppConfig;
use crate::services::itinerary_service::ItineraryService;

#[derive(Serialize)]
struct Liveness {
    ok: bool,
    name: String,
    time: String,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    generator: &'static str,
    version: &'static str,
}

/*
    GET /
*/
pub async fn liveness(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(Liveness {
        ok: true,
        name: config.name.clone(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/*
    GET /health
*/
pub async fn health_check(service: web::Data<ItineraryService>) -> impl Responder {
    // Missing credentials still serve templated plans, so this is not degraded.
    let generator = if service.has_generator() {
        "configured"
    } else {
        "not-configured"
    };

    HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        generator,
        version: env!("CARGO_PKG_VERSION"),
    })
}
