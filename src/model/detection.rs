//! Detection data model.
//!
//! A detection is one recognized object instance: a class label, a
//! confidence score, and a bounding box in either geographic or image-pixel
//! coordinates. Detections are constructed once at load time and never
//! mutated; filtering hands out borrowed views.

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, Region};

/// An axis-aligned box in geographic coordinates.
///
/// Invariant (owned by the producer): `min_lon <= max_lon` and
/// `min_lat <= max_lat`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self { min_lon, min_lat, max_lon, max_lat }
    }
}

/// An axis-aligned box in image-pixel coordinates: top-left corner plus
/// width/height, `w,h >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PixelBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// A bounding box in one of the two supported coordinate systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingBox {
    Geo(GeoBox),
    Pixel(PixelBox),
}

impl BoundingBox {
    /// The region this box spans on the viewer axes.
    ///
    /// Pixel boxes map onto the same axes the geographic data uses: the
    /// vertical (y) coordinate lands on the `lat` axis and the horizontal
    /// (x) on `lon`, so a pixel box `{x, y, w, h}` spans
    /// `[[y, x], [y+h, x+w]]`. Inverted input is passed through untouched.
    pub fn region(&self) -> Region {
        match self {
            BoundingBox::Geo(b) => Region::from_corners(b.min_lat, b.min_lon, b.max_lat, b.max_lon),
            BoundingBox::Pixel(b) => Region::from_corners(b.y, b.x, b.y + b.h, b.x + b.w),
        }
    }

    /// The centroid of the box.
    pub fn centroid(&self) -> Coord {
        self.region().center()
    }
}

/// A single recognized object instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Stable unique id. For the multi-tile document this is derived as
    /// `"<file>-<index>"` over the accepted records.
    pub id: String,
    /// Class label.
    pub label: String,
    /// Confidence score, nominally in `[0, 1]`. Out-of-range values are not
    /// rejected; they pass through and render degenerately.
    pub confidence: f64,
    /// Source image file, when the document carries one.
    pub file: Option<String>,
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        confidence: f64,
        bbox: BoundingBox,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            confidence,
            file: None,
            bbox,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// The region this detection's box spans.
    pub fn region(&self) -> Region {
        self.bbox.region()
    }

    /// The centroid of this detection's box.
    pub fn centroid(&self) -> Coord {
        self.bbox.centroid()
    }
}
