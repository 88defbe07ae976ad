//! Expansion of a calendar date range into its individual days.
//!
//! The provider's batch endpoint takes one query parameter per requested
//! date, so the tools first expand the `(start_date, end_date)` pair into
//! every `YYYY-MM-DD` day it covers.

use chrono::NaiveDate;

use crate::mcp::error::WorkdayError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expand `start_date..=end_date` into every day it covers, ascending.
///
/// # Errors
/// Returns `WorkdayError::InvalidFormat` when either input is not a valid
/// `YYYY-MM-DD` calendar date, and `WorkdayError::InvalidRange` when the
/// start date is later than the end date.
pub fn expand(start_date: &str, end_date: &str) -> Result<Vec<String>, WorkdayError> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;

    if start > end {
        return Err(WorkdayError::InvalidRange {
            start: start_date.to_string(),
            end: end_date.to_string(),
        });
    }

    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current.format(DATE_FORMAT).to_string());
        let Some(next) = current.succ_opt() else { break };
        current = next;
    }
    Ok(dates)
}

fn parse_date(input: &str) -> Result<NaiveDate, WorkdayError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| WorkdayError::InvalidFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_inclusive_ascending_range() {
        let dates = expand("2025-10-01", "2025-10-07").unwrap();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates.first().map(String::as_str), Some("2025-10-01"));
        assert_eq!(dates.last().map(String::as_str), Some("2025-10-07"));
        for pair in dates.windows(2) {
            let a = NaiveDate::parse_from_str(&pair[0], DATE_FORMAT).unwrap();
            let b = NaiveDate::parse_from_str(&pair[1], DATE_FORMAT).unwrap();
            assert_eq!((b - a).num_days(), 1);
        }
    }

    #[test]
    fn single_day_range_yields_one_date() {
        let dates = expand("2025-10-01", "2025-10-01").unwrap();
        assert_eq!(dates, vec!["2025-10-01"]);
    }

    #[test]
    fn crosses_month_and_leap_day_boundaries() {
        let dates = expand("2024-02-28", "2024-03-01").unwrap();
        assert_eq!(dates, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn range_length_matches_day_distance() {
        let dates = expand("2025-01-01", "2025-12-31").unwrap();
        assert_eq!(dates.len(), 365);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = expand("2025-10-10", "2025-10-01").unwrap_err();
        assert!(matches!(err, WorkdayError::InvalidRange { .. }));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for input in ["2025/10/01", "01-10-2025", "2025-13-01", "not-a-date", ""] {
            let err = expand(input, "2025-10-01").unwrap_err();
            assert!(matches!(err, WorkdayError::InvalidFormat(_)), "input: {input}");
        }
        let err = expand("2025-10-01", "2025-10-32").unwrap_err();
        assert!(matches!(err, WorkdayError::InvalidFormat(_)));
    }
}
