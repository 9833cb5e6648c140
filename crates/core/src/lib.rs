//! # Edgekit Core
//!
//! Pure client logic - no HTTP, no I/O.
//!
//! This crate contains:
//! - Analytics parameter validation and query construction
//! - The time-series response reshaper
//! - The transport port (trait) infrastructure implements
//!
//! ## Architecture Principles
//! - Only depends on `edgekit-domain`
//! - Network access exclusively via the [`ports::ManagementTransport`]
//!   trait
//! - Pure, testable logic

pub mod analytics;
pub mod ports;

pub use analytics::params::StatsParams;
pub use analytics::service::AppAnalyticsService;
pub use ports::ManagementTransport;
