use actix_cors::Cors;
use actix_web::{error::InternalError, web, HttpResponse};
use log::warn;

use crate::models::itinerary::ValidationFailure;

pub mod export;
pub mod health;
pub mod plan;

/// Malformed bodies get the same `{ ok: false, errors }` shape as failed validation.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        warn!("Rejected request body: {}", message);
        let response = HttpResponse::BadRequest().json(ValidationFailure::new(vec![message]));
        InternalError::from_response(err, response).into()
    })
}

/// Only `allowed_origin` when given, any origin otherwise.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::liveness))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/plan", web::post().to(plan::plan))
                .route("/plan/export", web::post().to(export::export)),
        );
}
