use serde_json::{json, Value};

use crate::models::trip::TripRequest;

const DEFAULT_INTERESTS: &str = "general sightseeing";
const NO_EXTRAS: &str = "none";

const DAY_FIELDS: [&str; 8] = [
    "date",
    "title",
    "summary",
    "morning",
    "afternoon",
    "evening",
    "foodSuggestions",
    "tips",
];

pub fn build_prompt(request: &TripRequest) -> String {
    let interests = request.interests();
    let interests = if interests.is_empty() {
        DEFAULT_INTERESTS.to_string()
    } else {
        interests.join(", ")
    };
    let extras = match request.extras() {
        "" => NO_EXTRAS,
        extras => extras,
    };

    format!(
        "You are a travel planner. Create a day-by-day itinerary for a trip to {destination} \
         from {start} to {end} (inclusive) for {travelers} traveler(s).\n\
         Interests: {interests}.\n\
         Budget level: {budget}.\n\
         Pace: {pace}.\n\
         Extra requests: {extras}.\n\
         Return exactly one entry in \"days\" for every calendar date in the range, in order, \
         using YYYY-MM-DD dates. For each day give a title, a one-sentence summary, \
         morning, afternoon and evening plans with approximate times, food suggestions \
         and practical tips.",
        destination = request.destination().unwrap_or_default(),
        start = request.start_date().unwrap_or_default(),
        end = request.end_date().unwrap_or_default(),
        travelers = request.travelers(),
        interests = interests,
        budget = request.budget_level(),
        pace = request.pace(),
        extras = extras,
    )
}

/// Response schema in the Gemini `responseSchema` dialect.
pub fn itinerary_schema() -> Value {
    let string_array = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    let day = json!({
        "type": "OBJECT",
        "properties": {
            "date": { "type": "STRING" },
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "morning": { "type": "STRING" },
            "afternoon": { "type": "STRING" },
            "evening": { "type": "STRING" },
            "foodSuggestions": string_array.clone(),
            "tips": string_array,
        },
        "required": DAY_FIELDS,
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "destination": { "type": "STRING" },
            "startDate": { "type": "STRING" },
            "endDate": { "type": "STRING" },
            "budgetLevel": { "type": "STRING" },
            "pace": { "type": "STRING" },
            "days": { "type": "ARRAY", "items": day },
        },
        "required": ["destination", "startDate", "endDate", "budgetLevel", "pace", "days"],
    })
}
