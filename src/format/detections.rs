//! Detections document parsing.
//!
//! Two document variants exist. The multi-tile pipeline emits a flat array
//! of georeferenced records; a single-image run emits one document with
//! pixel-space boxes. Both map into the same [`Detection`] model.

use serde::Deserialize;

use crate::format::error::LoadError;
use crate::model::{BoundingBox, Detection, GeoBox, ImageInfo, PixelBox};

/// Result of parsing a detections document: the accepted records plus the
/// count of records rejected for missing geometry.
#[derive(Debug, Default)]
pub struct DetectionsLoad {
    pub detections: Vec<Detection>,
    pub rejected: usize,
}

/// One record of the georeferenced detections array, as emitted by the
/// pipeline. `bbox` and `center` are optional at the parse layer so that a
/// record missing its geometry can be rejected individually instead of
/// failing the whole document.
#[derive(Debug, Deserialize)]
struct RawGeoRecord {
    file: String,
    label: String,
    score: f64,
    bbox: Option<GeoBox>,
    center: Option<RawCenter>,
}

/// Present in every well-formed record; only its presence is validated.
#[derive(Debug, Deserialize)]
struct RawCenter {
    #[allow(dead_code)]
    lon: f64,
    #[allow(dead_code)]
    lat: f64,
}

/// Parse the multi-tile detections document.
///
/// Each record is validated individually: records that do not parse, or
/// that are missing `bbox` or `center`, are rejected and counted. Ids are
/// derived as `"<file>-<index>"`, with the index assigned over the accepted
/// sequence so ids stay dense.
pub fn parse_geo_detections(json: &str) -> Result<DetectionsLoad, LoadError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = raw.len();

    let detections: Vec<Detection> = raw
        .into_iter()
        .filter_map(|value| {
            let record: RawGeoRecord = serde_json::from_value(value).ok()?;
            let bbox = record.bbox?;
            record.center?;
            Some((record.file, record.label, record.score, bbox))
        })
        .enumerate()
        .map(|(idx, (file, label, score, bbox))| {
            Detection::new(
                format!("{file}-{idx}"),
                label,
                score,
                BoundingBox::Geo(bbox),
            )
            .with_file(file)
        })
        .collect();

    Ok(DetectionsLoad {
        rejected: total - detections.len(),
        detections,
    })
}

/// The single-image detections document.
#[derive(Debug, Deserialize)]
struct RawImageDocument {
    image_id: String,
    width: u32,
    height: u32,
    detections: Vec<RawImageRecord>,
}

#[derive(Debug, Deserialize)]
struct RawImageRecord {
    id: String,
    #[serde(rename = "class")]
    label: String,
    confidence: f64,
    bbox: PixelBox,
}

/// Parse the single-image detections document.
pub fn parse_image_detections(json: &str) -> Result<(ImageInfo, DetectionsLoad), LoadError> {
    let raw: RawImageDocument = serde_json::from_str(json)?;

    let info = ImageInfo {
        image_id: raw.image_id,
        width: raw.width,
        height: raw.height,
    };

    let detections = raw
        .detections
        .into_iter()
        .map(|r| Detection::new(r.id, r.label, r.confidence, BoundingBox::Pixel(r.bbox)))
        .collect();

    Ok((
        info,
        DetectionsLoad {
            detections,
            rejected: 0,
        },
    ))
}
