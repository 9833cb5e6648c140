//! Analytics value types
//!
//! The metric and time-unit enumerations mirror the fixed sets the stats
//! backend accepts; anything outside them is rejected before a request is
//! built.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EdgeError;

/// Reshaped analytics result: app label → environment → second-epoch
/// timestamp → metric value.
pub type TimeSeries = BTreeMap<String, BTreeMap<String, BTreeMap<i64, f64>>>;

/// Named analytics measure exposed by the stats API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Total message count.
    #[serde(rename = "message_count")]
    MessageCount,
    /// Message count within the first 24 hours.
    #[serde(rename = "message_count-first24hrs")]
    MessageCountFirst24Hrs,
    /// Message count within the second 24 hours.
    #[serde(rename = "message_count-second24hrs")]
    MessageCountSecond24Hrs,
    /// Total error count.
    #[serde(rename = "error_count")]
    ErrorCount,
    /// Error count within the first 24 hours.
    #[serde(rename = "error_count-first24hrs")]
    ErrorCountFirst24Hrs,
    /// Sum of response times.
    #[serde(rename = "total_response_time")]
    TotalResponseTime,
    /// Maximum response time.
    #[serde(rename = "max_response_time")]
    MaxResponseTime,
    /// Minimum response time.
    #[serde(rename = "min_response_time")]
    MinResponseTime,
}

impl Metric {
    /// Wire spelling of the metric.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MessageCount => "message_count",
            Self::MessageCountFirst24Hrs => "message_count-first24hrs",
            Self::MessageCountSecond24Hrs => "message_count-second24hrs",
            Self::ErrorCount => "error_count",
            Self::ErrorCountFirst24Hrs => "error_count-first24hrs",
            Self::TotalResponseTime => "total_response_time",
            Self::MaxResponseTime => "max_response_time",
            Self::MinResponseTime => "min_response_time",
        }
    }

    /// Parse a single metric name, reporting the failure against `field`.
    pub fn parse(field: &str, value: &str) -> Result<Self, EdgeError> {
        match value {
            "message_count" => Ok(Self::MessageCount),
            "message_count-first24hrs" => Ok(Self::MessageCountFirst24Hrs),
            "message_count-second24hrs" => Ok(Self::MessageCountSecond24Hrs),
            "error_count" => Ok(Self::ErrorCount),
            "error_count-first24hrs" => Ok(Self::ErrorCountFirst24Hrs),
            "total_response_time" => Ok(Self::TotalResponseTime),
            "max_response_time" => Ok(Self::MaxResponseTime),
            "min_response_time" => Ok(Self::MinResponseTime),
            _ => Err(EdgeError::invalid_parameter(field, value)),
        }
    }

    /// Parse a comma-separated metric list (the `sortby` parameter shape).
    ///
    /// Every member must be a valid metric name; an empty list is rejected.
    pub fn parse_list(field: &str, value: &str) -> Result<Vec<Self>, EdgeError> {
        let items: Vec<&str> =
            value.split(',').map(str::trim).filter(|item| !item.is_empty()).collect();
        if items.is_empty() {
            return Err(EdgeError::invalid_parameter(field, value));
        }
        items.into_iter().map(|item| Self::parse(field, item)).collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("metric", s)
    }
}

/// Aggregation bucket granularity for analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// One-second buckets.
    Second,
    /// One-minute buckets.
    Minute,
    /// One-hour buckets.
    Hour,
    /// One-day buckets.
    Day,
    /// One-week buckets.
    Week,
    /// One-month buckets.
    Month,
    /// One-quarter buckets.
    Quarter,
    /// One-year buckets.
    Year,
}

impl TimeUnit {
    /// Wire spelling of the time unit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" => Ok(Self::Second),
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(EdgeError::invalid_parameter("timeUnit", s)),
        }
    }
}

/// Sort direction for analytics queries, normalized to uppercase on the
/// wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending.
    #[serde(rename = "ASC")]
    Asc,
    /// Descending.
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    /// Wire spelling of the sort order.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(EdgeError::invalid_parameter("sortorder", s)),
        }
    }
}

/// Principal that owns an app.
///
/// App names are not unique across owners, so analytics queries filter by
/// the owning developer or company. Companies have no dimension of their
/// own; the backend stores them under the `developer` dimension with a
/// composite `{org}@@@{company}` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppOwner {
    /// Developer identified by email address.
    Developer(String),
    /// Company identified by name.
    Company(String),
}
