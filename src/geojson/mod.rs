//! GeoJSON location ingestion

pub mod validator;

pub use validator::{validate, FEATURE_COLLECTION, POINT};
