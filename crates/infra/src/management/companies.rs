//! Company entity controller

use std::sync::Arc;

use edgekit_domain::{Company, Result};
use tracing::debug;

use super::decode_entity;
use crate::transport::EdgeTransport;

/// CRUD operations on the org's companies.
pub struct CompanyController {
    transport: Arc<EdgeTransport>,
}

impl CompanyController {
    /// Create a controller over the given transport.
    pub fn new(transport: Arc<EdgeTransport>) -> Self {
        Self { transport }
    }

    fn base_path(&self) -> String {
        format!("o/{}/companies", urlencoding::encode(self.transport.org_name()))
    }

    fn entity_path(&self, name: &str) -> String {
        format!("{}/{}", self.base_path(), urlencoding::encode(name))
    }

    /// Names of every company in the org.
    pub async fn list(&self) -> Result<Vec<String>> {
        decode_entity("company list", self.transport.get(&self.base_path()).await?)
    }

    /// Load one company by name.
    pub async fn load(&self, name: &str) -> Result<Company> {
        decode_entity("company", self.transport.get(&self.entity_path(name)).await?)
    }

    /// Register a company.
    pub async fn create(&self, company: &Company) -> Result<Company> {
        debug!(company = %company.name, "creating company");
        decode_entity("company", self.transport.post(&self.base_path(), company).await?)
    }

    /// Delete a company; the platform echoes the removed entity.
    pub async fn delete(&self, name: &str) -> Result<Company> {
        debug!(company = name, "deleting company");
        decode_entity("company", self.transport.delete(&self.entity_path(name)).await?)
    }
}
