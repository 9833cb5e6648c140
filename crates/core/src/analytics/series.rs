//! Time-series response reshaping
//!
//! The stats endpoint answers with parallel arrays: one `TimeUnit` list
//! of millisecond timestamps, and per-item, per-environment value lists
//! aligned with it by position. [`reshape`] folds that into a label →
//! environment → timestamp mapping.

use edgekit_domain::types::analytics::TimeSeries;
use edgekit_domain::{EdgeError, Result};
use serde::Deserialize;

/// Identifier dimension whose value becomes the entity label.
const LABEL_DIMENSION: &str = "developer_app";

/// Top-level envelope of an analytics response.
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    /// The payload; every well-formed response carries one.
    #[serde(rename = "Response")]
    pub response: Option<RawStatsResponse>,
}

/// The analytics payload.
#[derive(Debug, Deserialize)]
pub struct RawStatsResponse {
    /// Bucket timestamps in epoch milliseconds.
    #[serde(rename = "TimeUnit")]
    pub time_unit: Option<Vec<i64>>,
    /// Per-item statistics; absent when the query matched no data.
    #[serde(default)]
    pub stats: Option<RawStats>,
}

/// Container for the response items.
#[derive(Debug, Deserialize)]
pub struct RawStats {
    /// One row per dimension value.
    #[serde(default)]
    pub data: Option<Vec<RawStatsItem>>,
}

/// One response row: a dimension identifier plus its per-environment
/// series.
#[derive(Debug, Deserialize)]
pub struct RawStatsItem {
    /// Which dimension value this row describes.
    #[serde(default)]
    pub identifier: Option<RawIdentifier>,
    /// Value series, one entry per environment.
    #[serde(default)]
    pub metric: Option<Vec<RawMetricSeries>>,
}

/// Parallel name/value sequences describing a dimension.
#[derive(Debug, Deserialize)]
pub struct RawIdentifier {
    /// Dimension names.
    pub names: Option<Vec<String>>,
    /// Dimension values, aligned with `names` by index.
    pub values: Option<Vec<String>>,
}

/// Values for one environment, aligned with `TimeUnit` by index.
#[derive(Debug, Deserialize)]
pub struct RawMetricSeries {
    /// Environment name.
    pub env: Option<String>,
    /// Metric values.
    pub values: Option<Vec<f64>>,
}

fn malformed(context: impl Into<String>) -> EdgeError {
    EdgeError::MalformedResponse(context.into())
}

/// Reshape a raw analytics document into a [`TimeSeries`].
///
/// Millisecond bucket timestamps are floored to whole seconds. A
/// response without `stats.data` is a valid empty result. Within an
/// item, the label comes from the `developer_app` identifier entry and
/// defaults to the empty string when that dimension is absent; value
/// lists shorter than `TimeUnit` contribute only their prefix, and later
/// items overwrite earlier ones on (label, env, timestamp) collisions.
pub fn reshape(doc: serde_json::Value) -> Result<TimeSeries> {
    let envelope: StatsEnvelope =
        serde_json::from_value(doc).map_err(|err| malformed(err.to_string()))?;
    let response = envelope.response.ok_or_else(|| malformed("missing 'Response' envelope"))?;
    let time_unit =
        response.time_unit.as_ref().ok_or_else(|| malformed("Response: missing 'TimeUnit'"))?;

    let timestamps: Vec<i64> = time_unit.iter().map(|ms| ms.div_euclid(1000)).collect();

    let mut series = TimeSeries::new();
    let Some(items) = response.stats.and_then(|stats| stats.data) else {
        return Ok(series);
    };

    for (index, item) in items.into_iter().enumerate() {
        let identifier = item
            .identifier
            .ok_or_else(|| malformed(format!("stats.data[{index}]: missing 'identifier'")))?;
        let names = identifier
            .names
            .ok_or_else(|| malformed(format!("stats.data[{index}].identifier: missing 'names'")))?;
        let values = identifier
            .values
            .ok_or_else(|| malformed(format!("stats.data[{index}].identifier: missing 'values'")))?;

        let mut label = String::new();
        for (position, name) in names.iter().enumerate() {
            if name == LABEL_DIMENSION {
                label = values
                    .get(position)
                    .ok_or_else(|| {
                        malformed(format!(
                            "stats.data[{index}].identifier: no value for name index {position}"
                        ))
                    })?
                    .clone();
                break;
            }
        }

        let metrics = item
            .metric
            .ok_or_else(|| malformed(format!("stats.data[{index}]: missing 'metric'")))?;
        for (env_index, metric_series) in metrics.into_iter().enumerate() {
            let env = metric_series.env.ok_or_else(|| {
                malformed(format!("stats.data[{index}].metric[{env_index}]: missing 'env'"))
            })?;
            let values = metric_series.values.ok_or_else(|| {
                malformed(format!("stats.data[{index}].metric[{env_index}]: missing 'values'"))
            })?;

            let env_series = series.entry(label.clone()).or_default().entry(env).or_default();
            for (position, value) in values.into_iter().enumerate() {
                let Some(timestamp) = timestamps.get(position) else {
                    break;
                };
                env_series.insert(*timestamp, value);
            }
        }
    }

    Ok(series)
}
