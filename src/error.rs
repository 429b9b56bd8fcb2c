//! Error types for geoshm

use std::fmt;
use std::io;

/// Result type for geoshm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an uploaded location file is rejected.
///
/// Feature indices are 1-based so they can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Bytes are not valid UTF-8
    MalformedEncoding(String),

    /// Text is not a parseable JSON document of the expected shape
    MalformedDocument(String),

    /// Root `type` is not `FeatureCollection` (carries what was found)
    WrongRootType(Option<String>),

    /// The feature list is empty or absent
    EmptyCollection,

    /// Feature has no geometry
    MissingGeometry { feature: usize },

    /// Geometry is something other than a point
    UnsupportedGeometryType { feature: usize, found: Option<String> },

    /// Position missing or not exactly two numbers
    InvalidCoordinates { feature: usize },

    /// Longitude outside [-180, 180]
    LongitudeOutOfRange { feature: usize, value: f64 },

    /// Latitude outside [-90, 90]
    LatitudeOutOfRange { feature: usize, value: f64 },
}

impl ValidationError {
    /// Stable machine-readable name of the rejection kind
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MalformedEncoding(_) => "MalformedEncoding",
            ValidationError::MalformedDocument(_) => "MalformedDocument",
            ValidationError::WrongRootType(_) => "WrongRootType",
            ValidationError::EmptyCollection => "EmptyCollection",
            ValidationError::MissingGeometry { .. } => "MissingGeometry",
            ValidationError::UnsupportedGeometryType { .. } => "UnsupportedGeometryType",
            ValidationError::InvalidCoordinates { .. } => "InvalidCoordinates",
            ValidationError::LongitudeOutOfRange { .. } => "LongitudeOutOfRange",
            ValidationError::LatitudeOutOfRange { .. } => "LatitudeOutOfRange",
        }
    }

    /// 1-based index of the offending feature, if the error is feature-specific
    pub fn feature_index(&self) -> Option<usize> {
        match self {
            ValidationError::MissingGeometry { feature }
            | ValidationError::UnsupportedGeometryType { feature, .. }
            | ValidationError::InvalidCoordinates { feature }
            | ValidationError::LongitudeOutOfRange { feature, .. }
            | ValidationError::LatitudeOutOfRange { feature, .. } => Some(*feature),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MalformedEncoding(msg) => {
                write!(f, "File is not valid UTF-8 text: {}", msg)
            }
            ValidationError::MalformedDocument(msg) => {
                write!(f, "File is not a valid GeoJSON document: {}", msg)
            }
            ValidationError::WrongRootType(Some(found)) => {
                write!(f, "Expected type \"FeatureCollection\", found \"{}\"", found)
            }
            ValidationError::WrongRootType(None) => {
                write!(f, "Expected type \"FeatureCollection\", found no type")
            }
            ValidationError::EmptyCollection => write!(f, "FeatureCollection contains no features"),
            ValidationError::MissingGeometry { feature } => {
                write!(f, "Feature {}: missing geometry", feature)
            }
            ValidationError::UnsupportedGeometryType { feature, found } => write!(
                f,
                "Feature {}: only Point geometries are supported, found \"{}\"",
                feature,
                found.as_deref().unwrap_or("<missing>")
            ),
            ValidationError::InvalidCoordinates { feature } => {
                write!(f, "Feature {}: coordinates must be [longitude, latitude]", feature)
            }
            ValidationError::LongitudeOutOfRange { feature, value } => {
                write!(f, "Feature {}: longitude {} is outside [-180, 180]", feature, value)
            }
            ValidationError::LatitudeOutOfRange { feature, value } => {
                write!(f, "Feature {}: latitude {} is outside [-90, 90]", feature, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error types that can occur in geoshm operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Uploaded location data was rejected
    Validation(ValidationError),

    /// JSON serialization error
    Json(serde_json::Error),

    /// CSV export error
    Csv(csv::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Validation(e) => write!(f, "Validation failed: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Validation(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Csv(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}
