//! Viewport fit derivation.
//!
//! Translates (selection, filtered detections, tiles) into the region the
//! rendering surface should currently frame. Pure recomputation on every
//! relevant state change; absence of data yields the fallback region, never
//! an error.

use crate::geometry::{self, Region};
use crate::model::{Detection, Tile};

/// Padding (in surface pixels) when framing the fit-everything region.
pub const OVERVIEW_PADDING: f32 = 20.0;
/// Padding when framing a single selected detection, to zoom in close.
pub const SELECTION_PADDING: f32 = 40.0;

/// The region the surface should frame, with a padding allowance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    pub region: Region,
    pub padding: f32,
}

/// Observer interface for rendering layers.
///
/// Any surface (mapping widget, canvas, headless harness) implements this to
/// be told where to frame; intent flows back into the core as messages.
pub trait ViewObserver {
    fn viewport_changed(&mut self, fit: &ViewportFit);
}

/// Compute the current viewport fit.
///
/// A selection that resolves into `filtered` wins and is framed tightly.
/// Otherwise (no selection, or the selected id was filtered out) the
/// fit-everything region applies: filtered detections, then tiles, then the
/// hard-coded default.
pub fn viewport_fit(filtered: &[&Detection], tiles: &[Tile], selected: Option<&str>) -> ViewportFit {
    if let Some(id) = selected {
        if let Some(det) = filtered.iter().find(|d| d.id == id) {
            return ViewportFit {
                region: det.region(),
                padding: SELECTION_PADDING,
            };
        }
    }

    let region = geometry::viewport_region(
        filtered.iter().map(|d| d.region()),
        tiles.iter().map(Tile::region),
        geometry::DEFAULT_REGION,
    );

    ViewportFit {
        region,
        padding: OVERVIEW_PADDING,
    }
}
