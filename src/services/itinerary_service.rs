use log::{info, warn};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

use crate::models::itinerary::{ItineraryResult, ItinerarySource};
use crate::models::trip::TripRequest;
use crate::services::generation::interface::{
    GenerationError, GenerationParams, ItineraryGenerator,
};
use crate::services::prompt_service::{build_prompt, itinerary_schema};
use crate::services::template_service::TemplateService;

pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

/// Keys owned by the response envelope; dropped from generated payloads.
const ENVELOPE_KEYS: [&str; 2] = ["ok", "source"];

#[derive(Debug, PartialEq)]
enum MalformedReason {
    InvalidJson(String),
    NotAnObject,
    MissingDays,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::InvalidJson(msg) => write!(f, "response is not valid JSON: {}", msg),
            MalformedReason::NotAnObject => write!(f, "response is not a JSON object"),
            MalformedReason::MissingDays => write!(f, "response has no `days` array"),
        }
    }
}

/// Checks only the shape this service relies on: an object with a `days` array.
/// Day entries pass through untouched.
fn parse_generated(text: &str) -> Result<Map<String, Value>, MalformedReason> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| MalformedReason::InvalidJson(e.to_string()))?;

    let mut itinerary = match value {
        Value::Object(map) => map,
        _ => return Err(MalformedReason::NotAnObject),
    };

    if !itinerary.get("days").is_some_and(Value::is_array) {
        return Err(MalformedReason::MissingDays);
    }

    for key in ENVELOPE_KEYS {
        itinerary.remove(key);
    }

    Ok(itinerary)
}

/// Produces an itinerary for a validated trip, always.
///
/// The generator is `None` when no credential was configured at startup.
#[derive(Clone)]
pub struct ItineraryService {
    generator: Option<Arc<dyn ItineraryGenerator>>,
    params: GenerationParams,
    timeout: Duration,
}

impl ItineraryService {
    pub fn new(generator: Option<Arc<dyn ItineraryGenerator>>) -> Self {
        Self::with_config(
            generator,
            GenerationParams::default(),
            Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        )
    }

    pub fn with_config(
        generator: Option<Arc<dyn ItineraryGenerator>>,
        params: GenerationParams,
        timeout: Duration,
    ) -> Self {
        Self {
            generator,
            params,
            timeout,
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Plan a trip. Callers must have run the validator first.
    pub async fn plan(&self, request: &TripRequest) -> ItineraryResult {
        let request_id = Uuid::new_v4();

        let result = match &self.generator {
            None => TemplateService::build(request, ItinerarySource::FallbackNoCredentials),
            Some(generator) => self.generate(request_id, generator.as_ref(), request).await,
        };

        info!(
            "[{}] planned {} day(s) for '{}' (source: {})",
            request_id,
            result.day_count(),
            request.destination().unwrap_or_default(),
            result.source.as_str()
        );

        result
    }

    async fn generate(
        &self,
        request_id: Uuid,
        generator: &dyn ItineraryGenerator,
        request: &TripRequest,
    ) -> ItineraryResult {
        let prompt = build_prompt(request);
        let schema = itinerary_schema();

        let generation = generator.generate(&prompt, &schema, &self.params);
        let outcome = match timeout(self.timeout, generation).await {
            Ok(outcome) => outcome,
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(text) => match parse_generated(&text) {
                Ok(itinerary) => ItineraryResult::from_generated(itinerary),
                Err(reason) => {
                    warn!("[{}] unusable generated itinerary: {}", request_id, reason);
                    TemplateService::build(request, ItinerarySource::FallbackMalformed)
                }
            },
            Err(err) => {
                warn!("[{}] itinerary generation failed: {}", request_id, err);
                TemplateService::build(request, ItinerarySource::FallbackError)
            }
        }
    }
}
