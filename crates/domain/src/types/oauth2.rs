//! OAuth2 security-scheme metadata
//!
//! A value object describing how an API secured with OAuth2 expects to be
//! called. It stores metadata only; no token flow is implemented here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EdgeError, Result};

/// HTTP verb the authorization endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationVerb {
    /// Authorization request via GET.
    #[serde(rename = "GET")]
    Get,
    /// Authorization request via POST.
    #[serde(rename = "POST")]
    Post,
}

impl AuthorizationVerb {
    /// Wire spelling of the verb.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for AuthorizationVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorizationVerb {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(EdgeError::invalid_parameter("authorizationVerb", s)),
        }
    }
}

/// OAuth2 scheme metadata attached to API documentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OAuth2Scheme {
    /// OAuth2 grant type, e.g. `authorization_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    /// Authorization endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// Verb the authorization endpoint is called with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_verb: Option<AuthorizationVerb>,
    /// Access-token endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_url: Option<String>,
    /// Name of the request parameter carrying the access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_param_name: Option<String>,
    /// Scopes the scheme defines.
    pub scopes: Vec<String>,
}

impl OAuth2Scheme {
    /// Scheme discriminator used by the documentation model.
    pub const fn scheme_type() -> &'static str {
        "OAUTH2"
    }

    /// Set the authorization verb from its wire spelling.
    ///
    /// Anything but GET or POST (any case) is rejected.
    pub fn set_authorization_verb(&mut self, verb: &str) -> Result<()> {
        self.authorization_verb = Some(verb.parse()?);
        Ok(())
    }
}
