//! Domain-level constants
//!
//! Centralized location for platform constants shared across the
//! workspace.

/// Public-cloud Management API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.enterprise.apigee.com/v1";

/// Analytics environment bucket covering every environment in the org.
pub const DEFAULT_ENVIRONMENT: &str = "all";

/// Separator the analytics backend uses to pack company ownership into
/// the `developer` dimension (`{org}@@@{company}`).
pub const COMPANY_KEY_SEPARATOR: &str = "@@@";

/// Default HTTP timeout applied when the configuration does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
