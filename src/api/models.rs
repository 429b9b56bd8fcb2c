use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ValidationError;
use crate::geometry::MapFrame;
use crate::types::LocationSet;

/// Current location set of a session together with its map framing
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub session_id: String,
    pub source_name: Option<String>,
    pub count: usize,
    pub last_updated: Option<DateTime<Utc>>,
    pub locations: LocationSet,
    pub frame: MapFrame,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<usize>,
}

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind: None,
            feature: None,
        }
    }
}

impl From<&ValidationError> for ErrorResponse {
    fn from(e: &ValidationError) -> Self {
        Self {
            error: e.to_string(),
            kind: Some(e.kind()),
            feature: e.feature_index(),
        }
    }
}
