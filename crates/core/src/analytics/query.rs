//! Query-string construction for the stats endpoint

use edgekit_domain::constants::COMPANY_KEY_SEPARATOR;
use edgekit_domain::types::analytics::AppOwner;

/// Build the owner filter clause for an analytics query.
///
/// Companies have no dimension of their own: the backend stores company
/// ownership under the `developer` dimension keyed `{org}@@@{company}`,
/// and that composite spelling must be reproduced exactly for results to
/// match the live API. Developers filter by email on the
/// `developer_email` dimension.
pub fn owner_filter(org_name: &str, owner: &AppOwner) -> String {
    match owner {
        AppOwner::Company(company) => {
            format!("(developer eq '{org_name}{COMPANY_KEY_SEPARATOR}{company}')")
        }
        AppOwner::Developer(email) => format!("(developer_email eq '{email}')"),
    }
}

/// Serialize parameters as `key=value&...` in slice order.
///
/// Values are percent-encoded; keys are fixed tokens and emitted as-is.
/// No trailing separator.
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
