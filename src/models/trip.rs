use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DEFAULT_TRAVELERS: u32 = 1;

/// Trip form as submitted by the client.
///
/// Every field is optional on the wire: required-field checks belong to the
/// validator, and the accessors below apply the server-side defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub travelers: Option<u32>,
    pub interests: Option<Vec<String>>,
    pub budget_level: Option<BudgetLevel>,
    pub pace: Option<Pace>,
    pub extras: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "low",
            BudgetLevel::Medium => "medium",
            BudgetLevel::High => "high",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Chill,
    #[default]
    Balanced,
    Packed,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Chill => "chill",
            Pace::Balanced => "balanced",
            Pace::Packed => "packed",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Only the zero-padded form is accepted, so the echoed date and the first
/// day's date are always the same string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == value).then_some(date)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl TripRequest {
    pub fn destination(&self) -> Option<&str> {
        non_blank(&self.destination)
    }

    pub fn start_date(&self) -> Option<&str> {
        non_blank(&self.start_date)
    }

    pub fn end_date(&self) -> Option<&str> {
        non_blank(&self.end_date)
    }

    /// Both dates, if both parse. No ordering check here.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_date(self.start_date()?)?;
        let end = parse_date(self.end_date()?)?;
        Some((start, end))
    }

    /// Zero is treated like an absent value.
    pub fn travelers(&self) -> u32 {
        match self.travelers {
            Some(count) if count > 0 => count,
            _ => DEFAULT_TRAVELERS,
        }
    }

    /// Trimmed, non-blank interests with duplicates removed, first occurrence wins.
    pub fn interests(&self) -> Vec<String> {
        let mut interests: Vec<String> = Vec::new();
        for interest in self.interests.iter().flatten() {
            let interest = interest.trim();
            if interest.is_empty() || interests.iter().any(|seen| seen == interest) {
                continue;
            }
            interests.push(interest.to_string());
        }
        interests
    }

    pub fn budget_level(&self) -> BudgetLevel {
        self.budget_level.unwrap_or_default()
    }

    pub fn pace(&self) -> Pace {
        self.pace.unwrap_or_default()
    }

    pub fn extras(&self) -> &str {
        self.extras.as_deref().map(str::trim).unwrap_or("")
    }
}
