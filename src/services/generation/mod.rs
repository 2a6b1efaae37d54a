use log::{info, warn};
use std::sync::Arc;

use crate::config::GeminiConfig;

use self::gemini::GeminiClient;
use self::interface::{GenerationError, ItineraryGenerator};

pub mod gemini;
pub mod interface;

/// Generator for the configured credential.
///
/// No key gives `Ok(None)`; a key with an unusable endpoint is an error so
/// startup stops instead of serving `fallback-no-credentials`.
pub fn build_generator(
    config: &GeminiConfig,
) -> Result<Option<Arc<dyn ItineraryGenerator>>, GenerationError> {
    let Some(api_key) = config.api_key.clone() else {
        warn!("GEMINI_API_KEY not set. Every plan will use the templated itinerary.");
        return Ok(None);
    };

    let client = GeminiClient::new(api_key, &config.base_url, &config.model, config.timeout)?;
    info!(
        "Gemini generator configured (model: {}, endpoint: {})",
        config.model,
        client.endpoint()
    );
    let generator: Arc<dyn ItineraryGenerator> = Arc::new(client);
    Ok(Some(generator))
}
