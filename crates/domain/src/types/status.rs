//! Entity lifecycle status

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EdgeError;

/// Lifecycle status the platform tracks for entities.
///
/// Developers and companies report `active`/`inactive`; apps report
/// `approved`/`revoked`. `pending` shows up for entities awaiting
/// approval in either model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    /// Entity is live and may call APIs.
    Active,
    /// Entity is disabled; credentials stop working.
    Inactive,
    /// App is approved for API access.
    Approved,
    /// App access has been revoked.
    Revoked,
    /// Entity awaits approval.
    Pending,
}

impl EntityStatus {
    /// Wire spelling of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Approved => "approved",
            Self::Revoked => "revoked",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityStatus {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "approved" => Ok(Self::Approved),
            "revoked" => Ok(Self::Revoked),
            "pending" => Ok(Self::Pending),
            _ => Err(EdgeError::invalid_parameter("status", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ACTIVE".parse::<EntityStatus>().unwrap(), EntityStatus::Active);
        assert_eq!("Approved".parse::<EntityStatus>().unwrap(), EntityStatus::Approved);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "suspended".parse::<EntityStatus>().unwrap_err();
        assert!(matches!(err, EdgeError::InvalidParameter { ref field, .. } if field == "status"));
    }
}
