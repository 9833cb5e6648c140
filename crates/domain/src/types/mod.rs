//! Entity and value types for the Management API
//!
//! Entities are flat, explicitly-typed records mapped onto the platform's
//! JSON with serde. There is no generic property bag; the only shared
//! capability is the attribute list every entity kind carries.

pub mod analytics;
pub mod app;
pub mod attributes;
pub mod company;
pub mod developer;
pub mod oauth2;
pub mod product;
pub mod status;

pub use analytics::{AppOwner, Metric, SortOrder, TimeSeries, TimeUnit};
pub use app::DeveloperApp;
pub use attributes::{Attribute, Attributes};
pub use company::Company;
pub use developer::Developer;
pub use oauth2::{AuthorizationVerb, OAuth2Scheme};
pub use product::ApiProduct;
pub use status::EntityStatus;
