//! App analytics service
//!
//! Wires validation, query construction and reshaping around a
//! [`ManagementTransport`]: one GET per call, no state kept between
//! calls.

use std::sync::Arc;

use edgekit_domain::constants::DEFAULT_ENVIRONMENT;
use edgekit_domain::types::analytics::{AppOwner, Metric, SortOrder, TimeSeries, TimeUnit};
use edgekit_domain::Result;
use tracing::debug;

use super::params::StatsParams;
use super::query::{owner_filter, to_query_string};
use super::series;
use crate::ports::ManagementTransport;

/// Fetches and reshapes per-app analytics from the stats endpoint.
pub struct AppAnalyticsService {
    transport: Arc<dyn ManagementTransport>,
    org_name: String,
    environment: String,
}

impl AppAnalyticsService {
    /// Create a service querying the `all`-environments bucket.
    pub fn new(transport: Arc<dyn ManagementTransport>, org_name: impl Into<String>) -> Self {
        Self::with_environment(transport, org_name, DEFAULT_ENVIRONMENT)
    }

    /// Create a service querying a specific environment bucket.
    pub fn with_environment(
        transport: Arc<dyn ManagementTransport>,
        org_name: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self { transport, org_name: org_name.into(), environment: environment.into() }
    }

    /// Fetch a metric time series for one app, keyed by app label,
    /// environment and second-epoch timestamp.
    ///
    /// `owner` narrows the query to one developer's or company's app of
    /// that name; without it the series covers every app in the org with
    /// the given name, since app names are only unique per owner.
    /// Parameter problems fail with `InvalidParameter` before any request
    /// is made; structural response problems fail with
    /// `MalformedResponse`.
    #[allow(clippy::too_many_arguments)]
    pub async fn time_series_by_app_name(
        &self,
        owner: Option<&AppOwner>,
        app_name: &str,
        metric: Metric,
        time_start: &str,
        time_end: &str,
        time_unit: TimeUnit,
        sort_by: &str,
        sort_order: SortOrder,
    ) -> Result<TimeSeries> {
        let mut params =
            StatsParams::validate(metric, time_start, time_end, time_unit, sort_by, sort_order)?;
        if let Some(owner) = owner {
            params.push("filter", owner_filter(&self.org_name, owner));
        }
        params.push("developer_app", app_name);

        let path = format!(
            "o/{}/environments/{}/stats/apps?{}",
            urlencoding::encode(&self.org_name),
            urlencoding::encode(&self.environment),
            to_query_string(params.pairs())
        );
        debug!(org = %self.org_name, app = app_name, metric = %metric, "fetching app analytics");

        let doc = self.transport.get_json(&path).await?;
        series::reshape(doc)
    }
}
