//! API product controller

use std::sync::Arc;

use edgekit_core::analytics::query::to_query_string;
use edgekit_domain::{ApiProduct, Result};
use tracing::debug;

use super::decode_entity;
use crate::transport::EdgeTransport;

/// CRUD and attribute search over the org's API products.
pub struct ApiProductController {
    transport: Arc<EdgeTransport>,
}

impl ApiProductController {
    /// Create a controller over the given transport.
    pub fn new(transport: Arc<EdgeTransport>) -> Self {
        Self { transport }
    }

    fn base_path(&self) -> String {
        format!("o/{}/apiproducts", urlencoding::encode(self.transport.org_name()))
    }

    fn entity_path(&self, name: &str) -> String {
        format!("{}/{}", self.base_path(), urlencoding::encode(name))
    }

    /// Names of every API product in the org.
    pub async fn list(&self) -> Result<Vec<String>> {
        decode_entity("api product list", self.transport.get(&self.base_path()).await?)
    }

    /// Load one API product by name.
    pub async fn load(&self, name: &str) -> Result<ApiProduct> {
        decode_entity("api product", self.transport.get(&self.entity_path(name)).await?)
    }

    /// Create an API product.
    pub async fn create(&self, product: &ApiProduct) -> Result<ApiProduct> {
        debug!(product = %product.name, "creating api product");
        decode_entity("api product", self.transport.post(&self.base_path(), product).await?)
    }

    /// Update an API product, keyed by its name.
    pub async fn update(&self, product: &ApiProduct) -> Result<ApiProduct> {
        decode_entity(
            "api product",
            self.transport.put(&self.entity_path(&product.name), product).await?,
        )
    }

    /// Delete an API product; the platform echoes the removed entity.
    pub async fn delete(&self, name: &str) -> Result<ApiProduct> {
        debug!(product = name, "deleting api product");
        decode_entity("api product", self.transport.delete(&self.entity_path(name)).await?)
    }

    /// Names of products carrying the given custom attribute value.
    pub async fn search_by_attribute(
        &self,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<Vec<String>> {
        let query = to_query_string(&[
            ("attributename".to_string(), attribute_name.to_string()),
            ("attributevalue".to_string(), attribute_value.to_string()),
        ]);
        decode_entity(
            "api product search",
            self.transport.get(&format!("{}?{}", self.base_path(), query)).await?,
        )
    }
}
