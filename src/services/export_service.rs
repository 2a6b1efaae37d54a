use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::models::trip::{parse_date, DATE_FORMAT};

const FALLBACK_SLUG: &str = "trip";

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern is valid"))
}

/// Lowercase, with every run of non-alphanumerics collapsed to `-`.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let slug = separator().replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// `itinerary-<destination>-<startDate>-<endDate>.json`; unusable dates are left out.
pub fn export_filename(itinerary: &Map<String, Value>) -> String {
    let mut parts = vec![
        "itinerary".to_string(),
        slugify(
            itinerary
                .get("destination")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        ),
    ];

    for key in ["startDate", "endDate"] {
        let date = itinerary
            .get(key)
            .and_then(Value::as_str)
            .and_then(parse_date);
        if let Some(date) = date {
            parts.push(date.format(DATE_FORMAT).to_string());
        }
    }

    format!("{}.json", parts.join("-"))
}
