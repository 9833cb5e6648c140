//! App analytics: parameter validation, query construction and response
//! reshaping
//!
//! Follows the platform's legacy stats endpoint contract: one GET against
//! `o/{org}/environments/{env}/stats/apps` with a flat query string, one
//! nested JSON document back.

pub mod params;
pub mod query;
pub mod series;
pub mod service;

pub use params::StatsParams;
pub use query::{owner_filter, to_query_string};
pub use series::reshape;
pub use service::AppAnalyticsService;
