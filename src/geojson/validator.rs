//! Location upload validation
//!
//! Turns raw upload bytes into a [`LocationSet`], failing fast on the first
//! problem found. Feature checks run in a fixed order: geometry presence,
//! geometry type, coordinate shape, longitude range, latitude range.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::geometry::{LonLat, RangeViolation};
use crate::types::{LocationRecord, LocationSet, TurbineProperties};

/// Root `type` tag of an accepted document
pub const FEATURE_COLLECTION: &str = "FeatureCollection";

/// The only supported geometry type
pub const POINT: &str = "Point";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Validates an uploaded GeoJSON blob
///
/// Pure: the caller decides whether to commit the result to session state.
pub fn validate(raw: &[u8]) -> Result<LocationSet, ValidationError> {
    let result = validate_inner(raw);

    match &result {
        Ok(set) => debug!(records = set.len(), "location upload accepted"),
        Err(e) => warn!(
            kind = e.kind(),
            feature = e.feature_index(),
            "location upload rejected: {}",
            e
        ),
    }

    result
}

fn validate_inner(raw: &[u8]) -> Result<LocationSet, ValidationError> {
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    let text = std::str::from_utf8(raw)
        .map_err(|e| ValidationError::MalformedEncoding(e.to_string()))?;

    let document: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::MalformedDocument(e.to_string()))?;

    let root = document.as_object().ok_or(ValidationError::WrongRootType(None))?;
    match root.get("type").and_then(Value::as_str) {
        Some(FEATURE_COLLECTION) => {}
        found => return Err(ValidationError::WrongRootType(found.map(str::to_string))),
    }

    let features = match root.get("features") {
        None | Some(Value::Null) => return Err(ValidationError::EmptyCollection),
        Some(Value::Array(features)) => features,
        Some(_) => {
            return Err(ValidationError::MalformedDocument(
                "\"features\" must be an array".to_string(),
            ))
        }
    };

    if features.is_empty() {
        return Err(ValidationError::EmptyCollection);
    }

    let records = features
        .iter()
        .enumerate()
        .map(|(i, feature)| validate_feature(i + 1, feature))
        .collect::<Result<Vec<_>, _>>()?;

    LocationSet::from_records(records).ok_or(ValidationError::EmptyCollection)
}

fn validate_feature(index: usize, feature: &Value) -> Result<LocationRecord, ValidationError> {
    let feature = feature.as_object();

    let geometry = feature
        .and_then(|f| f.get("geometry"))
        .and_then(Value::as_object)
        .ok_or(ValidationError::MissingGeometry { feature: index })?;

    match geometry.get("type").and_then(Value::as_str) {
        Some(POINT) => {}
        found => {
            return Err(ValidationError::UnsupportedGeometryType {
                feature: index,
                found: found.map(str::to_string),
            })
        }
    }

    let position =
        read_position(geometry).ok_or(ValidationError::InvalidCoordinates { feature: index })?;

    position.validate().map_err(|violation| match violation {
        RangeViolation::Longitude(value) => {
            ValidationError::LongitudeOutOfRange { feature: index, value }
        }
        RangeViolation::Latitude(value) => {
            ValidationError::LatitudeOutOfRange { feature: index, value }
        }
    })?;

    let properties = TurbineProperties::from_json(feature.and_then(|f| f.get("properties")));

    Ok(LocationRecord::new(position.to_lat_lon(), properties))
}

fn read_position(geometry: &Map<String, Value>) -> Option<LonLat> {
    let components = geometry
        .get("coordinates")?
        .as_array()?
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()?;

    LonLat::from_position(&components)
}
