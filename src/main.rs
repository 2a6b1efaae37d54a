use std::io::{Error, ErrorKind};

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use trip_planner_api::config::AppConfig;
use trip_planner_api::routes;
use trip_planner_api::services::generation::build_generator;
use trip_planner_api::services::itinerary_service::ItineraryService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let generator = build_generator(&config.gemini)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    let service = web::Data::new(ItineraryService::with_config(
        generator,
        config.gemini.params.clone(),
        config.gemini.timeout,
    ));

    let host = config.host.clone();
    let port = config.port;
    let app_config = web::Data::new(config);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(app_config.cors_allowed_origin.as_deref()))
            .wrap(Logger::default())
            .app_data(app_config.clone())
            .app_data(service.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
