use chrono::NaiveDate;

use crate::models::itinerary::{DayPlan, Itinerary, ItineraryResult, ItinerarySource};
use crate::models::trip::{TripRequest, DATE_FORMAT};

const MORNING_TIME: &str = "08:30";
const AFTERNOON_TIME: &str = "13:00";
const EVENING_TIME: &str = "18:30";

/// Deterministic itinerary used whenever the model can't be used.
pub struct TemplateService;

impl TemplateService {
    /// Build a templated itinerary tagged with `source`.
    ///
    /// Never fails: unparsable or reversed dates give an empty day list.
    pub fn build(request: &TripRequest, source: ItinerarySource) -> ItineraryResult {
        ItineraryResult::from_template(source, Self::itinerary(request))
    }

    pub fn itinerary(request: &TripRequest) -> Itinerary {
        let destination = request.destination().unwrap_or_default().to_string();
        let days = match request.date_range() {
            Some((start, end)) => Self::days(request, start, end),
            None => Vec::new(),
        };

        Itinerary {
            destination,
            start_date: request.start_date().unwrap_or_default().to_string(),
            end_date: request.end_date().unwrap_or_default().to_string(),
            budget_level: request.budget_level(),
            pace: request.pace(),
            days,
        }
    }

    /// One plan per calendar day in `[start, end]`.
    pub fn days(request: &TripRequest, start: NaiveDate, end: NaiveDate) -> Vec<DayPlan> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .enumerate()
            .map(|(index, date)| Self::day(request, index, date))
            .collect()
    }

    fn day(request: &TripRequest, index: usize, date: NaiveDate) -> DayPlan {
        let destination = request.destination().unwrap_or_default();

        DayPlan {
            date: date.format(DATE_FORMAT).to_string(),
            title: format!("Day {} in {}", index + 1, destination),
            summary: format!(
                "A {} day around {} on a {} budget.",
                request.pace(),
                destination,
                request.budget_level()
            ),
            morning: format!(
                "{} - Breakfast near your stay, then walk a central neighborhood of {}.",
                MORNING_TIME, destination
            ),
            afternoon: format!(
                "{} - Lunch at a local spot, then visit a museum, market or landmark in {}.",
                AFTERNOON_TIME, destination
            ),
            evening: format!(
                "{} - Dinner and an easy evening stroll around {}.",
                EVENING_TIME, destination
            ),
            food_suggestions: vec![
                "A well-reviewed local breakfast cafe".to_string(),
                "A casual lunch spot popular with locals".to_string(),
                "A regional specialty restaurant for dinner".to_string(),
            ],
            tips: vec![
                "Check opening hours before heading out.".to_string(),
                "Leave buffer time between activities for transit.".to_string(),
                "Save an offline map of the area.".to_string(),
            ],
        }
    }
}
