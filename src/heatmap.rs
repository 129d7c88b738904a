//! Activity heatmap derivation.
//!
//! Derives one density sample per detection at its bounding-box centroid.
//! With no detections the sample list is empty and the overlay is a no-op.

use crate::geometry::Coord;
use crate::model::Detection;

/// Weight assigned to every sample. The upstream pipeline fixes this rather
/// than deriving it from confidence.
pub const SAMPLE_INTENSITY: f64 = 0.8;

/// One heatmap input point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSample {
    pub position: Coord,
    pub intensity: f64,
}

/// Derive heatmap samples from detection centroids.
pub fn heatmap_samples<'a, I>(detections: I) -> Vec<HeatSample>
where
    I: IntoIterator<Item = &'a Detection>,
{
    detections
        .into_iter()
        .map(|d| HeatSample {
            position: d.centroid(),
            intensity: SAMPLE_INTENSITY,
        })
        .collect()
}
