//! Core data types for geoshm

use std::fmt;

use serde::{Serialize, Serializer};

use crate::geometry::LatLon;

/// Text shown for attributes the uploaded file did not provide
pub const UNKNOWN_ATTRIBUTE: &str = "N/A";

/// A single turbine attribute, kept as close to the uploaded value as possible
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttributeValue {
    /// String value, or a boolean rendered as text
    Text(String),
    /// Numeric value
    Number(f64),
    /// Absent, null or structured value
    #[default]
    Unknown,
}

impl AttributeValue {
    /// Converts a raw JSON property; only scalars survive
    pub fn from_json(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::String(s)) => AttributeValue::Text(s.clone()),
            Some(serde_json::Value::Number(n)) => n
                .as_f64()
                .map(AttributeValue::Number)
                .unwrap_or(AttributeValue::Unknown),
            Some(serde_json::Value::Bool(b)) => AttributeValue::Text(b.to_string()),
            _ => AttributeValue::Unknown,
        }
    }

    /// Returns whether the attribute was not provided
    pub fn is_unknown(&self) -> bool {
        matches!(self, AttributeValue::Unknown)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{}", s),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Unknown => write!(f, "{}", UNKNOWN_ATTRIBUTE),
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeValue::Text(s) => serializer.serialize_str(s),
            AttributeValue::Number(n) => serializer.serialize_f64(*n),
            AttributeValue::Unknown => serializer.serialize_str(UNKNOWN_ATTRIBUTE),
        }
    }
}

/// The known turbine attributes; other property keys are dropped
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TurbineProperties {
    pub id: AttributeValue,
    pub name: AttributeValue,
    /// Rated capacity, usually MW
    pub capacity: AttributeValue,
    pub install_year: AttributeValue,
    pub status: AttributeValue,
}

impl TurbineProperties {
    /// Picks the known keys out of a GeoJSON `properties` value
    pub fn from_json(properties: Option<&serde_json::Value>) -> Self {
        let object = match properties.and_then(|p| p.as_object()) {
            Some(object) => object,
            None => return Self::default(),
        };

        Self {
            id: AttributeValue::from_json(object.get("id")),
            name: AttributeValue::from_json(object.get("name")),
            capacity: AttributeValue::from_json(object.get("capacity")),
            install_year: AttributeValue::from_json(object.get("install_year")),
            status: AttributeValue::from_json(object.get("status")),
        }
    }
}

/// One validated turbine location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub position: LatLon,
    pub properties: TurbineProperties,
}

impl LocationRecord {
    /// Creates a new record
    pub fn new(position: LatLon, properties: TurbineProperties) -> Self {
        Self { position, properties }
    }
}

/// A non-empty, ordered set of turbine locations from one upload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocationSet {
    records: Vec<LocationRecord>,
}

impl LocationSet {
    /// Wraps records in source order; returns `None` for an empty list
    pub fn from_records(records: Vec<LocationRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(Self { records })
        }
    }

    /// Records in source order
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Iterates over records in source order
    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.records.iter()
    }

    /// Number of records (always at least one)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Positions in `(lat, lon)` order, ready for the boundary engine
    pub fn positions(&self) -> Vec<LatLon> {
        self.records.iter().map(|r| r.position).collect()
    }
}

impl<'a> IntoIterator for &'a LocationSet {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
