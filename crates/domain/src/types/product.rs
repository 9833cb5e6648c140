//! API product entity

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;

/// A bundle of API proxies with an access policy, consumable by apps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiProduct {
    /// Product name, unique within the org.
    pub name: String,
    /// Human-readable name shown in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `auto` or `manual` key approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_type: Option<String>,
    /// Environments the product is served from.
    pub environments: Vec<String>,
    /// API proxy names bundled into the product.
    pub proxies: Vec<String>,
    /// URI paths granted by the product.
    pub api_resources: Vec<String>,
    /// OAuth scopes the product grants.
    pub scopes: Vec<String>,
    /// Allowed request count per quota interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<String>,
    /// Quota interval length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_interval: Option<String>,
    /// Quota interval unit (`minute`, `hour`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_time_unit: Option<String>,
    /// Custom attributes.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    /// Creation timestamp in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// User that created the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Last modification timestamp in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<i64>,
    /// User that last modified the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
}
