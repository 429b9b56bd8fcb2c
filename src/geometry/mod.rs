//! Coordinates, boundary hull and map framing

pub mod coordinate;
pub mod boundary;
pub mod frame;

pub use coordinate::{LatLon, LonLat, RangeViolation};
pub use boundary::{
    compute_boundary, compute_bounds, compute_centroid, cross, BoundaryPolygon, Bounds,
    FALLBACK_CENTROID,
};
pub use frame::MapFrame;
