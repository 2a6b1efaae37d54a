use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::trip::{BudgetLevel, Pace};

/// One calendar day of a templated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DayPlan {
    pub date: String,
    pub title: String,
    pub summary: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub food_suggestions: Vec<String>,
    pub tips: Vec<String>,
}

/// Strict on read so any payload with extra keys stays `Generated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Itinerary {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget_level: BudgetLevel,
    pub pace: Pace,
    pub days: Vec<DayPlan>,
}

/// Itinerary payload. Generated payloads are the model's object, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItineraryBody {
    Template(Itinerary),
    Generated(Map<String, Value>),
}

/// Where an itinerary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItinerarySource {
    Generated,
    FallbackMalformed,
    FallbackError,
    FallbackNoCredentials,
}

impl ItinerarySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItinerarySource::Generated => "generated",
            ItinerarySource::FallbackMalformed => "fallback-malformed",
            ItinerarySource::FallbackError => "fallback-error",
            ItinerarySource::FallbackNoCredentials => "fallback-no-credentials",
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, ItinerarySource::Generated)
    }
}

/// Successful plan response: `{ ok: true, source, ...itinerary }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryResult {
    pub ok: bool,
    pub source: ItinerarySource,
    #[serde(flatten)]
    pub itinerary: ItineraryBody,
}

impl ItineraryResult {
    pub fn from_template(source: ItinerarySource, itinerary: Itinerary) -> Self {
        Self {
            ok: true,
            source,
            itinerary: ItineraryBody::Template(itinerary),
        }
    }

    pub fn from_generated(itinerary: Map<String, Value>) -> Self {
        Self {
            ok: true,
            source: ItinerarySource::Generated,
            itinerary: ItineraryBody::Generated(itinerary),
        }
    }

    pub fn day_count(&self) -> usize {
        match &self.itinerary {
            ItineraryBody::Template(itinerary) => itinerary.days.len(),
            ItineraryBody::Generated(itinerary) => itinerary
                .get("days")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        }
    }

    /// Dates of each day in order. Generated days without a string `date` yield `None`.
    pub fn day_dates(&self) -> Vec<Option<String>> {
        match &self.itinerary {
            ItineraryBody::Template(itinerary) => itinerary
                .days
                .iter()
                .map(|day| Some(day.date.clone()))
                .collect(),
            ItineraryBody::Generated(itinerary) => itinerary
                .get("days")
                .and_then(Value::as_array)
                .map(|days| {
                    days.iter()
                        .map(|day| day.get("date").and_then(Value::as_str).map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Body of a 400 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub ok: bool,
    pub errors: Vec<String>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<String>) -> Self {
        Self { ok: false, errors }
    }
}
