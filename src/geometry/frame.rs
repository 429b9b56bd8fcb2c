//! Map framing derived from the current location set

use serde::Serialize;

use super::boundary::{compute_boundary, compute_bounds, compute_centroid, BoundaryPolygon, Bounds};
use super::coordinate::LatLon;
use crate::types::LocationSet;

/// Zoom used when there is no location set
pub const DEFAULT_ZOOM: u8 = 9;

/// Zoom used when every turbine sits on the same spot
pub const SINGLE_POINT_ZOOM: u8 = 12;

const MIN_ZOOM: u8 = 3;
const MAX_ZOOM: u8 = 15;

/// Everything the map view needs to draw the overlay and re-center itself
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub centroid: LatLon,
    /// Absent for fewer than three turbines
    pub boundary: Option<BoundaryPolygon>,
    pub bounds: Option<Bounds>,
    /// Suggested web-map zoom level
    pub zoom: u8,
}

impl MapFrame {
    /// Frames a set of positions
    pub fn from_points(points: &[LatLon]) -> Self {
        let bounds = compute_bounds(points);

        Self {
            centroid: compute_centroid(points),
            boundary: compute_boundary(points),
            bounds,
            zoom: bounds.map(zoom_for).unwrap_or(DEFAULT_ZOOM),
        }
    }

    /// Frames the session's current set, or the fallback view when there is none
    pub fn for_set(set: Option<&LocationSet>) -> Self {
        match set {
            Some(set) => Self::from_points(&set.positions()),
            None => Self::from_points(&[]),
        }
    }
}

/// Picks the largest tile zoom at which the bounds still fit in one 360° tile
fn zoom_for(bounds: Bounds) -> u8 {
    let span = bounds.lat_span().max(bounds.lon_span());
    if span <= 0.0 {
        return SINGLE_POINT_ZOOM;
    }

    let zoom = (360.0 / span).log2().floor();
    zoom.clamp(MIN_ZOOM as f64, MAX_ZOOM as f64) as u8
}
