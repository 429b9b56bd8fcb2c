//! Downloadable example of the expected upload format

/// Suggested file name for the sample download
pub const SAMPLE_FILENAME: &str = "sample_turbines.geojson";

/// Media type served with the sample
pub const GEOJSON_MEDIA_TYPE: &str = "application/geo+json";

/// Five turbines around the reference offshore site
pub const SAMPLE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": {"type": "Point", "coordinates": [126.10, 34.80]},
      "properties": {
        "id": "WTG-01",
        "name": "Turbine 01",
        "capacity": 8.0,
        "install_year": 2023,
        "status": "operating"
      }
    },
    {
      "type": "Feature",
      "geometry": {"type": "Point", "coordinates": [126.16, 34.82]},
      "properties": {
        "id": "WTG-02",
        "name": "Turbine 02",
        "capacity": 8.0,
        "install_year": 2023,
        "status": "operating"
      }
    },
    {
      "type": "Feature",
      "geometry": {"type": "Point", "coordinates": [126.22, 34.86]},
      "properties": {
        "id": "WTG-03",
        "name": "Turbine 03",
        "capacity": 8.0,
        "install_year": 2024,
        "status": "commissioning"
      }
    },
    {
      "type": "Feature",
      "geometry": {"type": "Point", "coordinates": [126.18, 34.93]},
      "properties": {
        "id": "WTG-04",
        "name": "Turbine 04",
        "capacity": 10.0,
        "install_year": 2024,
        "status": "operating"
      }
    },
    {
      "type": "Feature",
      "geometry": {"type": "Point", "coordinates": [126.15, 34.87]},
      "properties": {
        "id": "WTG-05",
        "name": "Turbine 05",
        "capacity": 10.0,
        "install_year": 2025,
        "status": "maintenance"
      }
    }
  ]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::validate;
    use crate::geometry::{compute_boundary, LatLon};
    use crate::types::AttributeValue;

    #[test]
    fn test_sample_validates() {
        let set = validate(SAMPLE_GEOJSON.as_bytes()).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.records()[0].position, LatLon::new(34.80, 126.10));
        assert_eq!(set.records()[3].properties.capacity, AttributeValue::Number(10.0));
    }

    #[test]
    fn test_sample_hull_skips_interior_turbine() {
        let set = validate(SAMPLE_GEOJSON.as_bytes()).unwrap();
        let hull = compute_boundary(&set.positions()).unwrap();

        assert_eq!(hull.len(), 4);
        assert!(!hull.vertices().contains(&LatLon::new(34.87, 126.15)));
    }
}
