//! # Edgekit Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP client and Management API transport
//! - Entity controllers (developers, apps, API products, companies)
//! - Configuration loading
//! - Error conversions from external crates into the domain taxonomy
//!
//! ## Architecture
//! - Implements traits defined in `edgekit-core`
//! - Contains all "impure" code (network I/O, environment access)

pub mod config;
pub mod errors;
pub mod http;
pub mod management;
pub mod transport;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::HttpClient;
pub use management::{
    ApiProductController, CompanyController, DeveloperAppAnalytics, DeveloperAppController,
    DeveloperController,
};
pub use transport::EdgeTransport;
