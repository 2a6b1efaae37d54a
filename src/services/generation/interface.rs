use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug)]
pub enum GenerationError {
    Configuration(String),
    Http(reqwest::Error),
    Api { status: u16, message: String },
    Timeout(Duration),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            GenerationError::Http(err) => write!(f, "HTTP error: {}", err),
            GenerationError::Api { status, message } => {
                write!(f, "Generation request failed with status {}: {}", status, message)
            }
            GenerationError::Timeout(after) => {
                write!(f, "Generation timed out after {}s", after.as_secs())
            }
        }
    }
}

impl Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Http(err)
    }
}

/// Text generation constrained to a JSON schema.
///
/// Implementations return the raw text; callers decide whether it is usable.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
        params: &GenerationParams,
    ) -> Result<String, GenerationError>;
}
