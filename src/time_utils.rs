//! Parsing of the ISO-8601 date-times accepted on the wire.

use chrono::{DateTime, NaiveDateTime};

use crate::error::AppError;

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 extended date-time into a zone-less wall-clock value.
///
/// Offset-qualified input (`Z`, `+02:00`) is accepted and keeps its local
/// wall-clock part; the offset itself is dropped.
pub fn parse_date_time(field: &str, raw: &str) -> Result<NaiveDateTime, AppError> {
    if raw.trim() != raw {
        return Err(AppError::Validation(format!(
            "invalid {field} '{raw}': surrounding whitespace"
        )));
    }
    for format in LOCAL_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .map_err(|err| AppError::Validation(format!("invalid {field} '{raw}': {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_local_date_time() {
        let parsed = parse_date_time("starts_at", "2024-01-01T00:00:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parses_fraction_and_minutes_only() {
        let with_fraction = parse_date_time("occurs_at", "2024-07-20T18:30:15.250").unwrap();
        assert_eq!(with_fraction.nanosecond(), 250_000_000);

        let minutes = parse_date_time("occurs_at", "2024-07-20T18:30").unwrap();
        assert_eq!(minutes.second(), 0);
        assert_eq!(minutes.minute(), 30);
    }

    #[test]
    fn offset_keeps_wall_clock() {
        let parsed = parse_date_time("ends_at", "2024-01-10T12:00:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 12);

        let utc = parse_date_time("ends_at", "2024-01-10T08:15:00Z").unwrap();
        assert_eq!(utc.hour(), 8);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_date_time("occurs_at", "not-a-date").unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("occurs_at")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_date_time("starts_at", "2024-13-01T00:00:00").is_err());
        assert!(parse_date_time("starts_at", "").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(parse_date_time("starts_at", " 2024-01-01T00:00:00 ").is_err());
        assert!(parse_date_time("starts_at", " 2024-01-01T00:00:00").is_err());
        assert!(parse_date_time("starts_at", "2024-01-01T00:00:00\n").is_err());
        assert!(parse_date_time("ends_at", " 2024-01-10T08:15:00Z").is_err());
    }
}
