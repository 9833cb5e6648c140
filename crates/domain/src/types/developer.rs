//! Developer entity

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::status::EntityStatus;

/// An app-owning developer registered in the organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Developer {
    /// Primary key: the developer's email address.
    pub email: String,
    /// UUID the platform assigns on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<String>,
    /// Login name, unique within the org.
    pub user_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Lifecycle status; assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    /// Names of apps this developer owns.
    pub apps: Vec<String>,
    /// Names of companies this developer is a member of.
    pub companies: Vec<String>,
    /// Owning organization; populated on read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
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

impl Developer {
    /// Whether this developer owns an app with the given name.
    pub fn has_app(&self, app_name: &str) -> bool {
        self.apps.iter().any(|app| app == app_name)
    }

    /// Whether this developer is a member of the given company.
    pub fn has_company(&self, company_name: &str) -> bool {
        self.companies.iter().any(|company| company == company_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_platform_payload() {
        let developer: Developer = serde_json::from_value(serde_json::json!({
            "email": "jane@example.com",
            "developerId": "b2f6c9e2-9d2a-4f5e-8f1f-0d6a3a2c1b4d",
            "userName": "jane",
            "firstName": "Jane",
            "lastName": "Doe",
            "status": "active",
            "apps": ["weather", "traffic"],
            "companies": ["globex"],
            "organizationName": "acme",
            "attributes": [{"name": "tier", "value": "gold"}],
            "createdAt": 1700000000000i64
        }))
        .expect("developer should deserialize");

        assert_eq!(developer.email, "jane@example.com");
        assert_eq!(developer.status, Some(EntityStatus::Active));
        assert!(developer.has_app("weather"));
        assert!(!developer.has_app("Weather"));
        assert!(developer.has_company("globex"));
        assert_eq!(developer.attributes.get("tier"), Some("gold"));
    }

    #[test]
    fn serialization_omits_server_assigned_fields_when_unset() {
        let developer = Developer {
            email: "jane@example.com".into(),
            user_name: "jane".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            ..Developer::default()
        };
        let json = serde_json::to_value(&developer).expect("developer should serialize");
        assert!(json.get("developerId").is_none());
        assert!(json.get("status").is_none());
        assert!(json.get("attributes").is_none());
    }
}
