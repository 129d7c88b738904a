//! Startup document loading.
//!
//! This module is the typed parse/validate boundary between the raw JSON
//! documents the detection pipeline emits and the viewer's data model. Each
//! document kind has its own parser; `load_scene` reads them together the
//! way the viewer shell does at startup.
//!
//! Validation is deliberately shallow: record shape is checked (and invalid
//! records counted rather than silently dropped), but numeric ranges are
//! not. An out-of-range confidence or an inverted box passes through and
//! renders degenerately without crashing.

mod detections;
mod error;
mod metrics;
mod tiles;

pub use detections::{DetectionsLoad, parse_geo_detections, parse_image_detections};
pub use error::LoadError;
pub use metrics::parse_metrics;
pub use tiles::parse_tiles;

use std::path::Path;

use crate::model::Scene;

/// Read and parse the startup documents into a [`Scene`].
///
/// `tiles_path` and `metrics_path` are optional: the single-image variant
/// has no tiles document, and metrics are only present when the pipeline
/// exported them. Any failure is terminal for the session; the caller
/// surfaces it as the permanent error state.
pub fn load_scene(
    detections_path: &Path,
    tiles_path: Option<&Path>,
    metrics_path: Option<&Path>,
) -> Result<Scene, LoadError> {
    let detections_json = std::fs::read_to_string(detections_path)?;
    let load = parse_geo_detections(&detections_json)?;
    if load.rejected > 0 {
        log::warn!(
            "dropped {} detection record(s) missing bbox or center",
            load.rejected
        );
    }

    let tiles = match tiles_path {
        Some(path) => parse_tiles(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    let metrics = match metrics_path {
        Some(path) => Some(parse_metrics(&std::fs::read_to_string(path)?)?),
        None => None,
    };

    log::info!(
        "loaded {} detections and {} tiles",
        load.detections.len(),
        tiles.len()
    );

    let mut scene = Scene::new(load.detections, tiles);
    if let Some(metrics) = metrics {
        scene = scene.with_metrics(metrics);
    }
    Ok(scene)
}
