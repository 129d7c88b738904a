//! Georeferenced tile metadata.

use serde::{Deserialize, Serialize};

use crate::geometry::Region;

/// A georeferenced image chip composited onto the map.
///
/// `bounds` holds two `(lat, lon)` corners, south-west first, exactly as the
/// tiles document stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Filename, unique among the loaded tiles. The rendering layer resolves
    /// it against the configured asset prefix.
    pub file: String,
    /// `[[min_lat, min_lon], [max_lat, max_lon]]`.
    pub bounds: [[f64; 2]; 2],
}

impl Tile {
    pub fn new(file: impl Into<String>, bounds: [[f64; 2]; 2]) -> Self {
        Self {
            file: file.into(),
            bounds,
        }
    }

    /// The region this tile covers.
    pub fn region(&self) -> Region {
        let [[min_lat, min_lon], [max_lat, max_lon]] = self.bounds;
        Region::from_corners(min_lat, min_lon, max_lat, max_lon)
    }
}
