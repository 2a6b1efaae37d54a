#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use trip_planner_api::config::AppConfig;
use trip_planner_api::routes;
use trip_planner_api::services::generation::interface::{
    GenerationError, GenerationParams, ItineraryGenerator,
};
use trip_planner_api::services::itinerary_service::ItineraryService;

pub const TEST_APP_NAME: &str = "trip-planner-test";

/// What the fake model does when asked for an itinerary.
#[derive(Clone)]
pub enum Behavior {
    Reply(String),
    Fail,
    Hang,
}

pub struct FakeGenerator {
    behavior: Behavior,
}

#[async_trait]
impl ItineraryGenerator for FakeGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _schema: &Value,
        _params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail => Err(GenerationError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            }),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

pub struct TestApp {
    pub config: AppConfig,
    pub service: ItineraryService,
}

impl TestApp {
    /// `None` behaves like a deployment without a Gemini key.
    pub fn new(behavior: Option<Behavior>) -> Self {
        Self::with_env(behavior, &[])
    }

    /// Like `new`, with extra configuration variables.
    pub fn with_env(behavior: Option<Behavior>, vars: &[(&str, &str)]) -> Self {
        let config = AppConfig::from_lookup(|key| match key {
            "APP_NAME" => Some(TEST_APP_NAME.to_string()),
            _ => vars
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string()),
        });

        let generator = behavior.map(|behavior| {
            let generator: Arc<dyn ItineraryGenerator> = Arc::new(FakeGenerator { behavior });
            generator
        });
        let service = ItineraryService::with_config(
            generator,
            GenerationParams::default(),
            Duration::from_millis(100),
        );

        Self { config, service }
    }

    pub fn create_app(
        &self,
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
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(self.service.clone()))
            .wrap(routes::cors(self.config.cors_allowed_origin.as_deref()))
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub fn trip_json() -> Value {
    json!({
        "destination": "Lisbon",
        "startDate": "2025-06-01",
        "endDate": "2025-06-03",
        "travelers": 2,
        "interests": ["food", "viewpoints"],
        "budgetLevel": "medium",
        "pace": "balanced",
        "extras": "one rest afternoon"
    })
}

pub fn generated_itinerary() -> Value {
    json!({
        "destination": "Lisbon",
        "startDate": "2025-06-01",
        "endDate": "2025-06-03",
        "budgetLevel": "medium",
        "pace": "balanced",
        "days": [
            {
                "date": "2025-06-01",
                "title": "Alfama and the castle",
                "summary": "Old town hills",
                "morning": "09:00 Castelo de São Jorge",
                "afternoon": "14:00 Alfama walk",
                "evening": "19:30 Fado dinner",
                "foodSuggestions": ["Pastel de nata"],
                "tips": ["Wear good shoes"]
            },
            {
                "date": "2025-06-02",
                "title": "Belém"
            },
            {
                "date": "2025-06-03",
                "title": "Sintra day trip"
            }
        ]
    })
}
