use crate::models::trip::{parse_date, TripRequest};

pub const INVALID_DATE_RANGE: &str = "Invalid date range";

/// Longest trip that can be planned, in calendar days.
pub const MAX_TRIP_DAYS: i64 = 60;

/// Check a trip request, collecting every violation.
///
/// An empty result means the request can be planned.
pub fn validate(request: &TripRequest) -> Vec<String> {
    let mut errors = Vec::new();

    let required = [
        ("destination", request.destination()),
        ("startDate", request.start_date()),
        ("endDate", request.end_date()),
    ];
    for (field, value) in required {
        if value.is_none() {
            errors.push(format!("{} is required", field));
        }
    }

    // A missing, unparsable or over-long range is a bad range.
    let start = request.start_date().and_then(parse_date);
    let end = request.end_date().and_then(parse_date);
    let valid_range = matches!(
        (start, end),
        (Some(start), Some(end)) if end >= start && (end - start).num_days() < MAX_TRIP_DAYS
    );
    if !valid_range {
        errors.push(INVALID_DATE_RANGE.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(destination: Option<&str>, start: Option<&str>, end: Option<&str>) -> TripRequest {
        TripRequest {
            destination: destination.map(str::to_string),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        let errors = validate(&request(Some("Lisbon"), Some("2025-06-01"), Some("2025-06-03")));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_single_day_trip_is_valid() {
        let errors = validate(&request(Some("Lisbon"), Some("2025-06-01"), Some("2025-06-01")));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_end_before_start_is_invalid_range() {
        let errors = validate(&request(Some("Rome"), Some("2025-05-10"), Some("2025-05-05")));
        assert_eq!(errors, vec![INVALID_DATE_RANGE.to_string()]);
    }

    #[test]
    fn test_missing_destination_only() {
        let errors = validate(&request(None, Some("2025-06-01"), Some("2025-06-02")));
        assert_eq!(errors, vec!["destination is required".to_string()]);
    }

    #[test]
    fn test_all_violations_collected() {
        let errors = validate(&request(None, None, None));
        assert_eq!(
            errors,
            vec![
                "destination is required".to_string(),
                "startDate is required".to_string(),
                "endDate is required".to_string(),
                INVALID_DATE_RANGE.to_string(),
            ]
        );
    }

    #[test]
    fn test_unparsable_date_is_invalid_range() {
        let errors = validate(&request(Some("Oslo"), Some("2025-13-40"), Some("2025-06-02")));
        assert_eq!(errors, vec![INVALID_DATE_RANGE.to_string()]);
    }

    #[test]
    fn test_unpadded_dates_are_invalid_range() {
        let errors = validate(&request(Some("Oslo"), Some("2025-6-1"), Some("2025-6-3")));
        assert_eq!(errors, vec![INVALID_DATE_RANGE.to_string()]);
    }

    #[test]
    fn test_trip_length_is_capped() {
        let errors = validate(&request(Some("Oslo"), Some("2025-01-01"), Some("2025-03-01")));
        assert!(errors.is_empty(), "60 days is allowed: {:?}", errors);

        let errors = validate(&request(Some("Oslo"), Some("2025-01-01"), Some("2025-03-02")));
        assert_eq!(errors, vec![INVALID_DATE_RANGE.to_string()]);

        let errors = validate(&request(Some("Oslo"), Some("0001-01-01"), Some("1000-12-31")));
        assert_eq!(errors, vec![INVALID_DATE_RANGE.to_string()]);
    }

    #[test]
    fn test_missing_end_date_reports_required_and_range() {
        let errors = validate(&request(Some("Oslo"), Some("2025-06-01"), None));
        assert!(errors.contains(&"endDate is required".to_string()));
        assert!(errors.contains(&INVALID_DATE_RANGE.to_string()));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_blank_destination_is_missing() {
        let errors = validate(&request(Some("  "), Some("2025-06-01"), Some("2025-06-02")));
        assert_eq!(errors, vec!["destination is required".to_string()]);
    }
}
