//! Metrics document parsing.

use crate::format::error::LoadError;
use crate::model::RunMetrics;

/// Parse the optional run-metrics document.
pub fn parse_metrics(json: &str) -> Result<RunMetrics, LoadError> {
    let metrics: RunMetrics = serde_json::from_str(json)?;
    Ok(metrics)
}
