//! Developer app analytics client
//!
//! Convenience wiring of [`AppAnalyticsService`] onto an
//! [`EdgeTransport`] so callers can go straight from an [`OrgConfig`] to
//! reshaped time series.

use std::sync::Arc;

use edgekit_core::analytics::service::AppAnalyticsService;
use edgekit_domain::constants::DEFAULT_ENVIRONMENT;
use edgekit_domain::types::analytics::{AppOwner, Metric, SortOrder, TimeSeries, TimeUnit};
use edgekit_domain::{OrgConfig, Result};

use crate::transport::EdgeTransport;

/// Per-app analytics over the configured organization.
pub struct DeveloperAppAnalytics {
    service: AppAnalyticsService,
}

impl DeveloperAppAnalytics {
    /// Query the `all`-environments bucket of the configured org.
    pub fn new(config: OrgConfig) -> Result<Self> {
        Self::with_environment(config, DEFAULT_ENVIRONMENT)
    }

    /// Query a specific environment bucket of the configured org.
    pub fn with_environment(config: OrgConfig, environment: impl Into<String>) -> Result<Self> {
        let org_name = config.org_name.clone();
        let transport = Arc::new(EdgeTransport::new(config)?);
        Ok(Self {
            service: AppAnalyticsService::with_environment(transport, org_name, environment),
        })
    }

    /// Reuse an existing transport (shared with entity controllers).
    pub fn from_transport(transport: Arc<EdgeTransport>, environment: impl Into<String>) -> Self {
        let org_name = transport.org_name().to_string();
        Self { service: AppAnalyticsService::with_environment(transport, org_name, environment) }
    }

    /// Fetch a metric time series for one app.
    ///
    /// See [`AppAnalyticsService::time_series_by_app_name`] for the
    /// parameter and failure contract.
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
        self.service
            .time_series_by_app_name(
                owner, app_name, metric, time_start, time_end, time_unit, sort_by, sort_order,
            )
            .await
    }
}
