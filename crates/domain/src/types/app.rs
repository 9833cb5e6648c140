//! Developer app entity

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::status::EntityStatus;

/// An app registered under a developer (or company).
///
/// App names are only unique per owner; two developers can both own an
/// app called `weather`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeveloperApp {
    /// App name, unique within its owner.
    pub name: String,
    /// UUID the platform assigns on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// UUID of the owning developer; populated on read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<String>,
    /// Lifecycle status; assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    /// OAuth callback URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// API products the app's credentials are approved for.
    pub api_products: Vec<String>,
    /// OAuth scopes granted to the app.
    pub scopes: Vec<String>,
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
