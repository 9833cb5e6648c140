//! Developer entity controller

use std::sync::Arc;

use edgekit_domain::{Developer, EntityStatus, Result};
use tracing::debug;

use super::decode_entity;
use crate::transport::EdgeTransport;

/// CRUD operations on the org's developers.
pub struct DeveloperController {
    transport: Arc<EdgeTransport>,
}

impl DeveloperController {
    /// Create a controller over the given transport.
    pub fn new(transport: Arc<EdgeTransport>) -> Self {
        Self { transport }
    }

    fn base_path(&self) -> String {
        format!("o/{}/developers", urlencoding::encode(self.transport.org_name()))
    }

    fn entity_path(&self, email: &str) -> String {
        format!("{}/{}", self.base_path(), urlencoding::encode(email))
    }

    /// Email addresses of every developer in the org.
    pub async fn list(&self) -> Result<Vec<String>> {
        decode_entity("developer list", self.transport.get(&self.base_path()).await?)
    }

    /// Load one developer by email address.
    pub async fn load(&self, email: &str) -> Result<Developer> {
        decode_entity("developer", self.transport.get(&self.entity_path(email)).await?)
    }

    /// Register a developer; returns the platform's view of the entity.
    pub async fn create(&self, developer: &Developer) -> Result<Developer> {
        debug!(email = %developer.email, "creating developer");
        decode_entity("developer", self.transport.post(&self.base_path(), developer).await?)
    }

    /// Update a developer, keyed by its email address.
    pub async fn update(&self, developer: &Developer) -> Result<Developer> {
        decode_entity(
            "developer",
            self.transport.put(&self.entity_path(&developer.email), developer).await?,
        )
    }

    /// Delete a developer; the platform echoes the removed entity.
    pub async fn delete(&self, email: &str) -> Result<Developer> {
        debug!(email, "deleting developer");
        decode_entity("developer", self.transport.delete(&self.entity_path(email)).await?)
    }

    /// Activate or deactivate a developer.
    ///
    /// Only `active` and `inactive` are meaningful here; the platform
    /// takes the status as a POST `action` parameter and answers with no
    /// content.
    pub async fn set_status(&self, email: &str, status: EntityStatus) -> Result<()> {
        debug!(email, status = %status, "changing developer status");
        self.transport
            .post_empty(&format!("{}?action={}", self.entity_path(email), status.as_str()))
            .await
    }
}
