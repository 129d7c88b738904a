//! The loaded world: detections, tiles, and run metadata.

use crate::model::{Detection, RunMetrics, Tile};

/// Descriptor of the source image for the single-image document variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub image_id: String,
    pub width: u32,
    pub height: u32,
}

/// Everything loaded at startup. Owned exclusively by the application state
/// holder; all other components receive read-only views.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub detections: Vec<Detection>,
    pub tiles: Vec<Tile>,
    pub metrics: Option<RunMetrics>,
    /// Present only for the single-image variant.
    pub image: Option<ImageInfo>,
}

impl Scene {
    pub fn new(detections: Vec<Detection>, tiles: Vec<Tile>) -> Self {
        Self {
            detections,
            tiles,
            metrics: None,
            image: None,
        }
    }

    pub fn with_metrics(mut self, metrics: RunMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_image(mut self, image: ImageInfo) -> Self {
        self.image = Some(image);
        self
    }

    /// Look up a detection by id.
    pub fn detection(&self, id: &str) -> Option<&Detection> {
        self.detections.iter().find(|d| d.id == id)
    }
}
