//! Organization configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Connection settings for one organization on the platform.
///
/// Constructed explicitly by callers (and test fixtures); nothing in the
/// workspace reads this from process-global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgConfig {
    /// Tenant namespace the client operates on.
    pub org_name: String,
    /// Management API root, e.g. `https://api.enterprise.apigee.com/v1`.
    pub endpoint: String,
    /// Org administrator user for HTTP Basic authentication.
    pub username: String,
    /// Password for `username`.
    #[serde(skip_serializing)]
    pub password: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl OrgConfig {
    /// Create a configuration with the default timeout.
    pub fn new(
        org_name: impl Into<String>,
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a configuration against the public-cloud endpoint.
    pub fn public_cloud(
        org_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(org_name, DEFAULT_ENDPOINT, username, password)
    }
}
