use std::env;
use std::time::Duration;

use crate::services::generation::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::services::generation::interface::{
    GenerationParams, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE,
};
use crate::services::itinerary_service::DEFAULT_GENERATION_TIMEOUT_SECS;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const APP_NAME: &str = "trip-planner-api";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` means no credential: planning goes straight to the template.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub params: GenerationParams,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_allowed_origin: Option<String>,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset; unparsable
    /// numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let timeout_secs = get("GENERATION_TIMEOUT_SECS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS);

        Self {
            host: get("HOST").unwrap_or_else(|| HOST.to_string()),
            port: get("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(PORT),
            name: get("APP_NAME").unwrap_or_else(|| APP_NAME.to_string()),
            cors_allowed_origin: get("CORS_ALLOWED_ORIGIN"),
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY"),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                params: GenerationParams {
                    temperature: get("GEMINI_TEMPERATURE")
                        .and_then(|value| value.parse().ok())
                        .unwrap_or(DEFAULT_TEMPERATURE),
                    max_output_tokens: get("GEMINI_MAX_OUTPUT_TOKENS")
                        .and_then(|value| value.parse().ok())
                        .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
                },
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.name, "trip-planner-api");
        assert!(config.cors_allowed_origin.is_none());
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.params, GenerationParams::default());
        assert_eq!(config.gemini.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PORT", "9090"),
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_TEMPERATURE", "0.2"),
            ("GEMINI_MAX_OUTPUT_TOKENS", "2048"),
            ("GENERATION_TIMEOUT_SECS", "5"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:5173"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.params.temperature, 0.2);
        assert_eq!(config.gemini.params.max_output_tokens, 2048);
        assert_eq!(config.gemini.timeout, Duration::from_secs(5));
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("http://localhost:5173")
        );
    }

    #[test]
    fn test_blank_key_means_no_credentials() {
        let config = config(&[("GEMINI_API_KEY", "   ")]);
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = config(&[("PORT", "eighty"), ("GENERATION_TIMEOUT_SECS", "-1")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini.timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        env::set_var("APP_NAME", "planner-under-test");
        env::remove_var("GEMINI_API_KEY");

        let config = AppConfig::from_env();
        assert_eq!(config.name, "planner-under-test");
        assert!(config.gemini.api_key.is_none());

        env::remove_var("APP_NAME");
    }
}
