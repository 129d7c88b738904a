//! Summary metrics of a detection run.

use serde::{Deserialize, Serialize};

/// Read-only display data describing the inference run that produced the
/// loaded detections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub num_images: u64,
    pub num_detections: u64,
    pub total_seconds: f64,
    /// `None` when no images were processed.
    pub avg_seconds_per_image: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_deserialize() {
        let json = r#"{
            "num_images": 15,
            "num_detections": 342,
            "total_seconds": 128.44,
            "avg_seconds_per_image": 8.56
        }"#;
        let metrics: RunMetrics = serde_json::from_str(json).unwrap();

        assert_eq!(metrics.num_images, 15);
        assert_eq!(metrics.num_detections, 342);
        assert_eq!(metrics.avg_seconds_per_image, Some(8.56));
    }

    #[test]
    fn test_metrics_null_average() {
        let json = r#"{
            "num_images": 0,
            "num_detections": 0,
            "total_seconds": 0.0,
            "avg_seconds_per_image": null
        }"#;
        let metrics: RunMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.avg_seconds_per_image, None);
    }
}
