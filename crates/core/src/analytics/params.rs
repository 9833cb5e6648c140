//! Analytics parameter validation
//!
//! Turns caller-supplied metric/time/sort arguments into the canonical,
//! insertion-ordered query-parameter list the stats endpoint expects.
//! All failures are [`EdgeError::InvalidParameter`] and happen before any
//! request is built.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use edgekit_domain::types::analytics::{Metric, SortOrder, TimeUnit};
use edgekit_domain::{EdgeError, Result};

/// Calendar formats accepted for time bounds, tried in order.
///
/// `mm/dd/YYYY hh:ii` is the documented format; the rest cover common
/// date-time spellings. All are interpreted as UTC.
const TIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only formats, resolved to midnight UTC.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Resolve a time bound to epoch seconds.
///
/// Accepts an integer epoch (seconds), RFC 3339, or any of the calendar
/// formats above. `field` names the parameter in the failure.
pub fn parse_time(field: &str, input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EdgeError::invalid_parameter(field, input));
    }
    if let Ok(epoch) = trimmed.parse::<i64>() {
        return Ok(epoch);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.timestamp());
    }
    for format in TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc().timestamp());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(parsed.and_time(NaiveTime::MIN).and_utc().timestamp());
        }
    }
    Err(EdgeError::invalid_parameter(field, input))
}

/// Validated, insertion-ordered analytics query parameters.
///
/// Iteration order is the emission order; the stats endpoint does not
/// care, but deterministic output keeps the query testable.
#[derive(Debug, Clone)]
pub struct StatsParams {
    pairs: Vec<(String, String)>,
}

impl StatsParams {
    /// Validate the caller-supplied arguments into a parameter list.
    ///
    /// Emits, in order: `select`, `timeStart`, `timeEnd`, `timeUnit`,
    /// `sortby`, `sortorder`. Time bounds are normalized to epoch
    /// seconds; the sort list is re-joined from its parsed members.
    pub fn validate(
        metric: Metric,
        time_start: &str,
        time_end: &str,
        time_unit: TimeUnit,
        sort_by: &str,
        sort_order: SortOrder,
    ) -> Result<Self> {
        let start = parse_time("timeStart", time_start)?;
        let end = parse_time("timeEnd", time_end)?;
        if end < start {
            return Err(EdgeError::invalid_parameter(
                "timeEnd",
                format!("{} (precedes timeStart)", time_end.trim()),
            ));
        }
        let sort_metrics = Metric::parse_list("sortby", sort_by)?;
        let sortby =
            sort_metrics.iter().map(|metric| metric.as_str()).collect::<Vec<_>>().join(",");

        let mut params = Self { pairs: Vec::new() };
        params.push("select", metric.as_str());
        params.push("timeStart", start.to_string());
        params.push("timeEnd", end.to_string());
        params.push("timeUnit", time_unit.as_str());
        params.push("sortby", sortby);
        params.push("sortorder", sort_order.as_str());
        Ok(params)
    }

    /// Append a parameter, preserving insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// The parameters in emission order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_defaults(time_start: &str, time_end: &str) -> Result<StatsParams> {
        StatsParams::validate(
            Metric::MessageCount,
            time_start,
            time_end,
            TimeUnit::Day,
            "message_count",
            SortOrder::Asc,
        )
    }

    #[test]
    fn emits_keys_in_stable_order() {
        let params = validate_defaults("1000", "2000").expect("params should validate");
        let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["select", "timeStart", "timeEnd", "timeUnit", "sortby", "sortorder"]);
    }

    #[test]
    fn numeric_epochs_pass_through() {
        let params = validate_defaults(" 1000 ", "2000").expect("params should validate");
        assert_eq!(params.pairs()[1], ("timeStart".to_string(), "1000".to_string()));
        assert_eq!(params.pairs()[2], ("timeEnd".to_string(), "2000".to_string()));
    }

    #[test]
    fn calendar_strings_resolve_to_utc_epochs() {
        // 01/15/2024 06:30 UTC
        assert_eq!(parse_time("timeStart", "01/15/2024 06:30").unwrap(), 1_705_300_200);
        assert_eq!(parse_time("timeStart", "2024-01-15 06:30:00").unwrap(), 1_705_300_200);
        assert_eq!(parse_time("timeStart", "2024-01-15T06:30:00+00:00").unwrap(), 1_705_300_200);
        // Date-only resolves to midnight
        assert_eq!(parse_time("timeStart", "01/15/2024").unwrap(), 1_705_276_800);
    }

    #[test]
    fn unparseable_time_is_invalid_parameter() {
        let err = parse_time("timeStart", "three days ago").unwrap_err();
        match err {
            EdgeError::InvalidParameter { field, value } => {
                assert_eq!(field, "timeStart");
                assert_eq!(value, "three days ago");
            }
            other => panic!("expected invalid parameter, got {:?}", other),
        }
    }

    #[test]
    fn end_before_start_is_invalid_parameter() {
        let err = validate_defaults("2000", "1000").unwrap_err();
        assert!(matches!(err, EdgeError::InvalidParameter { ref field, .. } if field == "timeEnd"));
    }

    #[test]
    fn equal_bounds_are_accepted() {
        assert!(validate_defaults("1500", "1500").is_ok());
    }

    #[test]
    fn sort_list_is_canonicalized() {
        let params = StatsParams::validate(
            Metric::MessageCount,
            "1000",
            "2000",
            TimeUnit::Hour,
            " message_count , error_count ",
            SortOrder::Desc,
        )
        .expect("params should validate");
        assert_eq!(params.pairs()[4], ("sortby".to_string(), "message_count,error_count".to_string()));
        assert_eq!(params.pairs()[5], ("sortorder".to_string(), "DESC".to_string()));
    }

    #[test]
    fn invalid_sort_member_fails_validation() {
        let err = StatsParams::validate(
            Metric::MessageCount,
            "1000",
            "2000",
            TimeUnit::Hour,
            "message_count,bogus",
            SortOrder::Asc,
        )
        .unwrap_err();
        assert!(matches!(err, EdgeError::InvalidParameter { ref field, .. } if field == "sortby"));
    }
}
