//! Axis-order aware coordinate types
//!
//! GeoJSON stores positions as `[longitude, latitude]`, while every boundary
//! and centroid routine in this crate works in `(latitude, longitude)` order.
//! The two orders get distinct types so the swap happens in exactly one place:
//! [`LonLat::to_lat_lon`].

use serde::{Deserialize, Serialize};

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// A position in wire order, as it appears in a GeoJSON `coordinates` array
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// A position in internal order, used by the boundary and centroid math
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Which axis of a [`LonLat`] failed its range check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeViolation {
    Longitude(f64),
    Latitude(f64),
}

impl LonLat {
    /// Creates a wire-order position
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Reads a GeoJSON position; anything but exactly two components is rejected
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lon, lat] => Some(Self::new(*lon, *lat)),
            _ => None,
        }
    }

    /// Checks longitude, then latitude, against the WGS84 degree ranges
    pub fn validate(&self) -> Result<(), RangeViolation> {
        if !in_range(self.lon, LONGITUDE_RANGE) {
            return Err(RangeViolation::Longitude(self.lon));
        }
        if !in_range(self.lat, LATITUDE_RANGE) {
            return Err(RangeViolation::Latitude(self.lat));
        }
        Ok(())
    }

    /// Swaps into internal `(lat, lon)` order
    pub fn to_lat_lon(self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

impl LatLon {
    /// Creates an internal-order position
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Swaps back into wire `[lon, lat]` order
    pub fn to_lon_lat(self) -> LonLat {
        LonLat::new(self.lon, self.lat)
    }

    /// Squared planar distance in degree space
    pub fn distance_sq(&self, other: &LatLon) -> f64 {
        let dlat = other.lat - self.lat;
        let dlon = other.lon - self.lon;
        dlat * dlat + dlon * dlon
    }
}

impl From<LonLat> for LatLon {
    fn from(value: LonLat) -> Self {
        value.to_lat_lon()
    }
}

impl From<LatLon> for [f64; 2] {
    /// GeoJSON position, `[lon, lat]`
    fn from(value: LatLon) -> Self {
        [value.lon, value.lat]
    }
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value >= min && value <= max
}
