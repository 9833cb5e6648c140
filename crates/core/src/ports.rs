//! Infrastructure port interfaces

use async_trait::async_trait;
use edgekit_domain::Result;

/// Trait for the HTTP transport the Management API client talks through.
///
/// Implementations own authentication and connection handling; callers
/// hand over a path (with query string) relative to the API root and get
/// back the decoded JSON body. Errors surface as the transport taxonomy
/// (`Transport`/`Auth`/`NotFound`) untouched.
#[async_trait]
pub trait ManagementTransport: Send + Sync {
    /// Perform an authenticated GET and decode the response body as JSON.
    async fn get_json(&self, path_and_query: &str) -> Result<serde_json::Value>;
}
