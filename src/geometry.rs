//! Bounding-region mathematics.
//!
//! Pure functions for computing axis-aligned regions, their unions, and the
//! viewport-fit precedence, extracted for testability and reusability.

/// A point on the viewer's two axes.
///
/// For georeferenced data `lat`/`lon` are geographic degrees. For
/// pixel-space data the image is composited onto the same axes, so `lat`
/// carries the vertical (y) coordinate and `lon` the horizontal (x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// An axis-aligned rectangle spanning `min` to `max` on both axes.
///
/// No normalization is performed: a region built from an inverted box is
/// degenerate and downstream framing of it is undefined. Callers own the
/// `min <= max` invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min: Coord,
    pub max: Coord,
}

impl Region {
    pub fn new(min: Coord, max: Coord) -> Self {
        Self { min, max }
    }

    /// Build a region from corner values, south-west first.
    pub fn from_corners(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min: Coord::new(min_lat, min_lon),
            max: Coord::new(max_lat, max_lon),
        }
    }

    /// The center point of the region.
    pub fn center(&self) -> Coord {
        Coord::new(
            (self.min.lat + self.max.lat) / 2.0,
            (self.min.lon + self.max.lon) / 2.0,
        )
    }

    /// The smallest region covering both `self` and `other`.
    pub fn union(&self, other: &Region) -> Region {
        Region {
            min: Coord::new(
                self.min.lat.min(other.min.lat),
                self.min.lon.min(other.min.lon),
            ),
            max: Coord::new(
                self.max.lat.max(other.max.lat),
                self.max.lon.max(other.max.lon),
            ),
        }
    }
}

/// Region shown when neither detections nor tiles are available.
pub const DEFAULT_REGION: Region = Region {
    min: Coord { lat: 51.88, lon: 4.33 },
    max: Coord { lat: 51.90, lon: 4.36 },
};

/// Minimal axis-aligned rectangle covering every input region.
///
/// Returns `None` for an empty input, signalling "no data yet". The
/// reduction is commutative, so input order never changes the result.
pub fn union_regions<I>(regions: I) -> Option<Region>
where
    I: IntoIterator<Item = Region>,
{
    regions.into_iter().reduce(|acc, r| acc.union(&r))
}

/// Pick the region the viewport should frame when nothing is selected.
///
/// Precedence: the union of the currently filtered detections' regions,
/// then the union of tile regions, then `fallback`. Detections win over
/// tiles because the viewer is detection-centric.
pub fn viewport_region<D, T>(detection_regions: D, tile_regions: T, fallback: Region) -> Region
where
    D: IntoIterator<Item = Region>,
    T: IntoIterator<Item = Region>,
{
    union_regions(detection_regions)
        .or_else(|| union_regions(tile_regions))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Region {
        Region::from_corners(min_lat, min_lon, max_lat, max_lon)
    }

    #[test]
    fn test_union_of_singleton_is_identity() {
        let r = region(51.88, 4.30, 51.89, 4.31);
        assert_eq!(union_regions([r]), Some(r));
    }

    #[test]
    fn test_union_of_empty_is_none() {
        assert_eq!(union_regions(std::iter::empty::<Region>()), None);
    }

    #[test]
    fn test_union_is_order_independent() {
        let a = region(0.0, 0.0, 1.0, 1.0);
        let b = region(-2.0, 3.0, 0.5, 5.0);
        let c = region(0.2, -1.0, 4.0, 0.3);

        let forward = union_regions([a, b, c]);
        let shuffled = union_regions([c, a, b]);
        let reversed = union_regions([b, c, a]);

        assert_eq!(forward, shuffled);
        assert_eq!(forward, reversed);
        assert_eq!(forward, Some(region(-2.0, -1.0, 4.0, 5.0)));
    }

    #[test]
    fn test_union_covers_all_inputs() {
        let a = region(10.0, 10.0, 20.0, 20.0);
        let b = region(15.0, 5.0, 25.0, 18.0);
        let merged = union_regions([a, b]).unwrap();

        assert_eq!(merged, region(10.0, 5.0, 25.0, 20.0));
    }

    #[test]
    fn test_viewport_region_falls_back_when_empty() {
        let fallback = region(51.88, 4.33, 51.90, 4.36);
        let picked = viewport_region(
            std::iter::empty::<Region>(),
            std::iter::empty::<Region>(),
            fallback,
        );
        assert_eq!(picked, fallback);
    }

    #[test]
    fn test_viewport_region_prefers_detections_over_tiles() {
        let det = region(1.0, 1.0, 2.0, 2.0);
        let tile = region(-10.0, -10.0, 10.0, 10.0);
        let fallback = DEFAULT_REGION;

        let picked = viewport_region([det], [tile], fallback);
        assert_eq!(picked, det);
    }

    #[test]
    fn test_viewport_region_uses_tiles_when_no_detections() {
        let tile_a = region(0.0, 0.0, 1.0, 1.0);
        let tile_b = region(1.0, 1.0, 2.0, 3.0);

        let picked = viewport_region(std::iter::empty::<Region>(), [tile_a, tile_b], DEFAULT_REGION);
        assert_eq!(picked, region(0.0, 0.0, 2.0, 3.0));
    }

    #[test]
    fn test_region_center() {
        let r = region(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Coord::new(20.0, 30.0));
    }
}
