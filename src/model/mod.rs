//! Data models for the viewer core.

mod detection;
mod metrics;
mod scene;
mod tile;

pub use detection::{BoundingBox, Detection, GeoBox, PixelBox};
pub use metrics::RunMetrics;
pub use scene::{ImageInfo, Scene};
pub use tile::Tile;
