//! Boundary polygon and centroid computation
//!
//! The hull is a Graham scan working in `(lat, lon)` order: the anchor is the
//! lexicographically smallest point by latitude then longitude, the remaining
//! points are swept by polar angle around it, and any vertex that does not make
//! a strict left turn is dropped. Collinear boundary points are therefore
//! excluded from the result.

use std::cmp::Ordering;

use serde::Serialize;

use super::coordinate::LatLon;

/// Map center used when there is nothing to average (reference offshore site)
pub const FALLBACK_CENTROID: LatLon = LatLon { lat: 34.87, lon: 126.17 };

/// Tolerance for the on-or-inside test
const CONTAINS_EPSILON: f64 = 1e-12;

/// Convex polygon enclosing a set of turbine positions
///
/// Vertices run counter-clockwise starting at the anchor point and the ring is
/// left open (the first vertex is not repeated).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryPolygon {
    vertices: Vec<LatLon>,
}

/// Axis-aligned extent of a set of positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundaryPolygon {
    /// Hull vertices, counter-clockwise from the anchor
    pub fn vertices(&self) -> &[LatLon] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the polygon has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when fewer than three vertices remain
    ///
    /// Collinear input leaves the two extreme points; identical input leaves one.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Closed `[lon, lat]` ring suitable for a GeoJSON Polygon overlay
    ///
    /// Empty for a degenerate polygon, which has no area to draw.
    pub fn to_geojson_ring(&self) -> Vec<[f64; 2]> {
        if self.is_degenerate() {
            return Vec::new();
        }

        let mut ring: Vec<[f64; 2]> = self.vertices.iter().map(|&v| v.into()).collect();
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        ring
    }

    /// Returns whether `point` lies on or inside the polygon
    pub fn contains(&self, point: &LatLon) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => self.vertices[0].distance_sq(point) <= CONTAINS_EPSILON,
            2 => on_segment(&self.vertices[0], &self.vertices[1], point),
            n => (0..n).all(|i| {
                let a = &self.vertices[i];
                let b = &self.vertices[(i + 1) % n];
                cross(a, b, point) >= -CONTAINS_EPSILON
            }),
        }
    }
}

impl Bounds {
    /// Latitude span in degrees
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude span in degrees
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

/// Turn direction of `o -> a -> b`
///
/// Positive for a counter-clockwise (left) turn, zero when collinear and
/// negative for a clockwise turn, with longitude as x and latitude as y.
pub fn cross(o: &LatLon, a: &LatLon, b: &LatLon) -> f64 {
    (a.lon - o.lon) * (b.lat - o.lat) - (a.lat - o.lat) * (b.lon - o.lon)
}

/// Computes the convex hull of `points`
///
/// Returns `None` for fewer than three points. Points sharing a polar angle
/// around the anchor are ordered nearest first, then by input order, so the
/// result is deterministic for a given input.
pub fn compute_boundary(points: &[LatLon]) -> Option<BoundaryPolygon> {
    if points.len() < 3 {
        return None;
    }

    let anchor = *points
        .iter()
        .min_by(|a, b| a.lat.total_cmp(&b.lat).then(a.lon.total_cmp(&b.lon)))?;

    let mut sorted: Vec<(f64, f64, LatLon)> = points
        .iter()
        .map(|&p| {
            let angle = (p.lat - anchor.lat).atan2(p.lon - anchor.lon);
            (angle, anchor.distance_sq(&p), p)
        })
        .collect();
    sorted.sort_by(|a, b| compare_polar(a, b));

    let mut hull: Vec<LatLon> = Vec::with_capacity(sorted.len());
    for (_, _, candidate) in sorted {
        if hull.last() == Some(&candidate) {
            continue;
        }
        while hull.len() >= 2 {
            let turn = cross(&hull[hull.len() - 2], &hull[hull.len() - 1], &candidate);
            if turn > 0.0 {
                break;
            }
            hull.pop();
        }
        hull.push(candidate);
    }

    Some(BoundaryPolygon { vertices: hull })
}

/// Arithmetic mean of latitudes and longitudes
///
/// Falls back to [`FALLBACK_CENTROID`] for an empty slice.
pub fn compute_centroid(points: &[LatLon]) -> LatLon {
    if points.is_empty() {
        return FALLBACK_CENTROID;
    }

    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));

    LatLon::new(lat_sum / n, lon_sum / n)
}

/// Axis-aligned extent of `points`, or `None` when empty
pub fn compute_bounds(points: &[LatLon]) -> Option<Bounds> {
    let first = points.first()?;
    let init = Bounds {
        min_lat: first.lat,
        min_lon: first.lon,
        max_lat: first.lat,
        max_lon: first.lon,
    };

    Some(points.iter().skip(1).fold(init, |b, p| Bounds {
        min_lat: b.min_lat.min(p.lat),
        min_lon: b.min_lon.min(p.lon),
        max_lat: b.max_lat.max(p.lat),
        max_lon: b.max_lon.max(p.lon),
    }))
}

fn compare_polar(a: &(f64, f64, LatLon), b: &(f64, f64, LatLon)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}

fn on_segment(a: &LatLon, b: &LatLon, p: &LatLon) -> bool {
    if cross(a, b, p).abs() > CONTAINS_EPSILON {
        return false;
    }
    p.lat >= a.lat.min(b.lat) - CONTAINS_EPSILON
        && p.lat <= a.lat.max(b.lat) + CONTAINS_EPSILON
        && p.lon >= a.lon.min(b.lon) - CONTAINS_EPSILON
        && p.lon <= a.lon.max(b.lon) + CONTAINS_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ll(lat: f64, lon: f64) -> LatLon {
        LatLon::new(lat, lon)
    }

    fn is_counter_clockwise(vertices: &[LatLon]) -> bool {
        let n = vertices.len();
        (0..n).all(|i| cross(&vertices[i], &vertices[(i + 1) % n], &vertices[(i + 2) % n]) > 0.0)
    }

    #[test]
    fn test_fewer_than_three_points() {
        assert!(compute_boundary(&[]).is_none());
        assert!(compute_boundary(&[ll(34.0, 126.0)]).is_none());
        assert!(compute_boundary(&[ll(34.0, 126.0), ll(35.0, 127.0)]).is_none());
    }

    #[test]
    fn test_triangle_starts_at_anchor() {
        let t1 = ll(34.0, 126.0);
        let t2 = ll(34.0, 126.2);
        let t3 = ll(34.2, 126.1);

        let hull = compute_boundary(&[t3, t2, t1]).unwrap();
        assert_eq!(hull.vertices(), &[t1, t2, t3]);
    }

    #[test]
    fn test_interior_point_excluded() {
        let points = [ll(0.0, 0.0), ll(0.0, 4.0), ll(4.0, 4.0), ll(4.0, 0.0), ll(2.0, 2.0)];
        let hull = compute_boundary(&points).unwrap();

        assert_eq!(hull.vertices(), &[ll(0.0, 0.0), ll(0.0, 4.0), ll(4.0, 4.0), ll(4.0, 0.0)]);
        assert!(is_counter_clockwise(hull.vertices()));
    }

    #[test]
    fn test_collinear_edge_points_excluded() {
        let points = [
            ll(0.0, 0.0),
            ll(0.0, 1.0),
            ll(0.0, 2.0),
            ll(1.0, 2.0),
            ll(2.0, 2.0),
            ll(2.0, 0.0),
            ll(1.0, 0.0),
        ];
        let hull = compute_boundary(&points).unwrap();

        assert_eq!(hull.vertices(), &[ll(0.0, 0.0), ll(0.0, 2.0), ll(2.0, 2.0), ll(2.0, 0.0)]);
    }

    #[test]
    fn test_duplicate_anchor() {
        let points = [ll(0.0, 0.0), ll(0.0, 0.0), ll(1.0, 1.0), ll(0.0, 2.0)];
        let hull = compute_boundary(&points).unwrap();

        assert_eq!(hull.vertices(), &[ll(0.0, 0.0), ll(0.0, 2.0), ll(1.0, 1.0)]);
    }

    #[test]
    fn test_all_collinear_is_degenerate() {
        let points = [ll(0.0, 0.0), ll(1.0, 1.0), ll(2.0, 2.0), ll(3.0, 3.0)];
        let hull = compute_boundary(&points).unwrap();

        assert!(hull.is_degenerate());
        assert_eq!(hull.vertices(), &[ll(0.0, 0.0), ll(3.0, 3.0)]);
        for p in &points {
            assert!(hull.contains(p));
        }
    }

    #[test]
    fn test_identical_points() {
        let p = ll(34.0, 126.0);
        let hull = compute_boundary(&[p, p, p]).unwrap();

        assert_eq!(hull.vertices(), &[p]);
        assert!(hull.is_degenerate());
        assert!(hull.contains(&p));
        assert!(hull.to_geojson_ring().is_empty());
    }

    #[test]
    fn test_no_repeated_vertices_with_duplicates() {
        let points = [
            ll(0.0, 0.0),
            ll(0.0, 2.0),
            ll(0.0, 2.0),
            ll(2.0, 2.0),
            ll(2.0, 2.0),
            ll(2.0, 0.0),
            ll(0.0, 0.0),
        ];
        let hull = compute_boundary(&points).unwrap();

        assert_eq!(hull.vertices(), &[ll(0.0, 0.0), ll(0.0, 2.0), ll(2.0, 2.0), ll(2.0, 0.0)]);
    }

    #[test]
    fn test_collinear_ring_is_empty() {
        let hull = compute_boundary(&[ll(0.0, 0.0), ll(1.0, 1.0), ll(2.0, 2.0)]).unwrap();
        assert!(hull.to_geojson_ring().is_empty());
    }

    #[test]
    fn test_geojson_ring_is_closed_lon_lat() {
        let hull = compute_boundary(&[ll(34.0, 126.0), ll(34.0, 126.2), ll(34.2, 126.1)]).unwrap();
        let ring = hull.to_geojson_ring();

        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], [126.0, 34.0]);
        assert_eq!(ring[0], ring[3]);
    }

    #[test]
    fn test_random_point_sets_are_enclosed() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let count = rng.random_range(3..40);
            let points: Vec<LatLon> = (0..count)
                .map(|_| ll(rng.random_range(33.0..36.0), rng.random_range(125.0..128.0)))
                .collect();

            let hull = compute_boundary(&points).unwrap();
            assert!(hull.len() >= 3);
            assert!(is_counter_clockwise(hull.vertices()));
            assert!(hull.vertices().iter().all(|v| points.contains(v)));
            assert!(points.iter().all(|p| hull.contains(p)));
            assert!(hull.contains(&compute_centroid(&points)));

            let anchor = hull.vertices()[0];
            assert!(points
                .iter()
                .all(|p| p.lat > anchor.lat || (p.lat == anchor.lat && p.lon >= anchor.lon)));
        }
    }

    #[test]
    fn test_deterministic() {
        let points = [ll(1.0, 1.0), ll(0.0, 0.0), ll(2.0, 0.0), ll(1.0, 0.5), ll(0.0, 2.0)];
        assert_eq!(compute_boundary(&points), compute_boundary(&points));
        assert_eq!(compute_centroid(&points), compute_centroid(&points));
    }

    #[test]
    fn test_centroid() {
        let c = compute_centroid(&[ll(34.0, 126.0), ll(34.0, 126.2), ll(34.2, 126.1)]);
        assert!((c.lat - 34.0667).abs() < 1e-4);
        assert!((c.lon - 126.1).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_fallback() {
        assert_eq!(compute_centroid(&[]), ll(34.87, 126.17));
    }

    #[test]
    fn test_bounds() {
        assert!(compute_bounds(&[]).is_none());

        let b = compute_bounds(&[ll(34.0, 126.2), ll(34.5, 126.0), ll(34.2, 126.1)]).unwrap();
        assert_eq!(b.min_lat, 34.0);
        assert_eq!(b.max_lat, 34.5);
        assert_eq!(b.min_lon, 126.0);
        assert_eq!(b.max_lon, 126.2);
        assert!((b.lat_span() - 0.5).abs() < 1e-12);
    }
}
