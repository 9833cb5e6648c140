//! Company entity

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::status::EntityStatus;

/// A company: the other kind of app-owning principal besides developers.
///
/// The analytics backend has no company dimension; company ownership is
/// packed into the `developer` dimension as `{org}@@@{company}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    /// Company name, unique within the org.
    pub name: String,
    /// Human-readable name shown in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Lifecycle status; assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    /// Owning organization; populated on read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Names of apps this company owns.
    pub apps: Vec<String>,
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
