//! Developer app controller

use std::sync::Arc;

use edgekit_domain::{DeveloperApp, Result};
use tracing::debug;

use super::decode_entity;
use crate::transport::EdgeTransport;

/// CRUD operations on one developer's apps.
pub struct DeveloperAppController {
    transport: Arc<EdgeTransport>,
    developer_email: String,
}

impl DeveloperAppController {
    /// Create a controller scoped to the given developer.
    pub fn new(transport: Arc<EdgeTransport>, developer_email: impl Into<String>) -> Self {
        Self { transport, developer_email: developer_email.into() }
    }

    fn base_path(&self) -> String {
        format!(
            "o/{}/developers/{}/apps",
            urlencoding::encode(self.transport.org_name()),
            urlencoding::encode(&self.developer_email)
        )
    }

    fn entity_path(&self, app_name: &str) -> String {
        format!("{}/{}", self.base_path(), urlencoding::encode(app_name))
    }

    /// Names of the developer's apps.
    pub async fn list(&self) -> Result<Vec<String>> {
        decode_entity("app list", self.transport.get(&self.base_path()).await?)
    }

    /// Load one app by name.
    pub async fn load(&self, app_name: &str) -> Result<DeveloperApp> {
        decode_entity("app", self.transport.get(&self.entity_path(app_name)).await?)
    }

    /// Register an app under this developer.
    pub async fn create(&self, app: &DeveloperApp) -> Result<DeveloperApp> {
        debug!(developer = %self.developer_email, app = %app.name, "creating app");
        decode_entity("app", self.transport.post(&self.base_path(), app).await?)
    }

    /// Update an app, keyed by its name.
    pub async fn update(&self, app: &DeveloperApp) -> Result<DeveloperApp> {
        decode_entity("app", self.transport.put(&self.entity_path(&app.name), app).await?)
    }

    /// Delete an app; the platform echoes the removed entity.
    pub async fn delete(&self, app_name: &str) -> Result<DeveloperApp> {
        debug!(developer = %self.developer_email, app = app_name, "deleting app");
        decode_entity("app", self.transport.delete(&self.entity_path(app_name)).await?)
    }

    /// Approve the app for API access.
    pub async fn approve(&self, app_name: &str) -> Result<()> {
        self.transport.post_empty(&format!("{}?action=approve", self.entity_path(app_name))).await
    }

    /// Revoke the app's API access.
    pub async fn revoke(&self, app_name: &str) -> Result<()> {
        self.transport.post_empty(&format!("{}?action=revoke", self.entity_path(app_name))).await
    }
}
