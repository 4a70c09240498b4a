//! Time and calendar utilities
//!
//! Every calendar computation in the crate uses UTC days.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{DashboardError, DashboardResult};

/// Which end of a day a bare date resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// UTC calendar day of `at`
pub fn utc_day(at: &DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}

/// Midnight UTC starting `day`
pub fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}

/// Last representable instant of `day` in UTC
pub fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    start_of_day(day) + Duration::days(1) - Duration::nanoseconds(1)
}

/// Short display label, e.g. `Oct 16`
pub fn day_label(day: NaiveDate) -> String {
    day.format("%b %d").to_string()
}

/// Parse an ISO date or RFC 3339 timestamp
///
/// A bare `YYYY-MM-DD` resolves to the start or end of that UTC day
/// depending on `bound`; full timestamps are used as given.
pub fn parse_date_param(value: &str, bound: DayBound) -> DashboardResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }

    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(match bound {
            DayBound::Start => start_of_day(day),
            DayBound::End => end_of_day(day),
        });
    }

    Err(DashboardError::InvalidArgument(format!(
        "'{}' is not an ISO date (YYYY-MM-DD) or RFC 3339 timestamp",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_date_bounds() {
        let start = parse_date_param("2024-02-29", DayBound::Start).unwrap();
        let end = parse_date_param("2024-02-29", DayBound::End).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-02-29T00:00:00+00:00");
        assert_eq!(utc_day(&end), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(end + Duration::nanoseconds(1), start + Duration::days(1));
    }

    #[test]
    fn test_rfc3339_is_normalized_to_utc() {
        let at = parse_date_param("2024-03-01T02:30:00+02:00", DayBound::End).unwrap();
        assert_eq!(at.to_rfc3339(), "2024-03-01T00:30:00+00:00");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_date_param("yesterday", DayBound::Start).is_err());
        assert!(parse_date_param("2024-13-01", DayBound::Start).is_err());
    }

    #[test]
    fn test_day_label() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
        assert_eq!(day_label(day), "Oct 06");
    }
}
