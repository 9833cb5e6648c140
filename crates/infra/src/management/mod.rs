//! Management API entity controllers
//!
//! Thin CRUD plumbing: each controller owns a shared [`EdgeTransport`]
//! and maps one entity kind's endpoints onto typed domain records.

pub mod analytics;
pub mod apps;
pub mod companies;
pub mod developers;
pub mod products;

pub use analytics::DeveloperAppAnalytics;
pub use apps::DeveloperAppController;
pub use companies::CompanyController;
pub use developers::DeveloperController;
pub use products::ApiProductController;

use edgekit_domain::{EdgeError, Result};
use serde::de::DeserializeOwned;

/// Decode a platform JSON document into a typed entity.
pub(crate) fn decode_entity<T: DeserializeOwned>(
    what: &str,
    value: serde_json::Value,
) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|err| EdgeError::MalformedResponse(format!("{what}: {err}")))
}
