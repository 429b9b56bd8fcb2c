//! geoshm - turbine location ingestion for an offshore wind digital twin
//!
//! geoshm validates uploaded GeoJSON turbine locations, derives the convex
//! boundary of a wind farm and its centroid for map framing, and keeps the
//! latest upload per browser session.
//!
//! # Examples
//!
//! ## Validating an upload
//!
//! ```
//! use geoshm::{validate, compute_boundary, compute_centroid};
//!
//! let raw = br#"{"type":"FeatureCollection","features":[
//!     {"geometry":{"type":"Point","coordinates":[126.0,34.0]},"properties":{"id":"T1"}},
//!     {"geometry":{"type":"Point","coordinates":[126.2,34.0]},"properties":{"id":"T2"}},
//!     {"geometry":{"type":"Point","coordinates":[126.1,34.2]},"properties":{"id":"T3"}}
//! ]}"#;
//!
//! let set = validate(raw)?;
//! let points = set.positions();
//!
//! let hull = compute_boundary(&points).expect("three points form a hull");
//! assert_eq!(hull.len(), 3);
//!
//! let center = compute_centroid(&points);
//! assert!((center.lat - 34.0667).abs() < 1e-4);
//! # Ok::<(), geoshm::ValidationError>(())
//! ```
//!
//! ## Keeping the result per session
//!
//! ```
//! use geoshm::{validate, MapFrame, SessionId, SessionStore, SAMPLE_GEOJSON};
//!
//! let store = SessionStore::new(16);
//! let session = SessionId::generate();
//!
//! store.commit(&session, validate(SAMPLE_GEOJSON.as_bytes())?, None);
//!
//! let frame = MapFrame::for_set(store.locations(&session).as_ref());
//! assert!(frame.boundary.is_some());
//! # Ok::<(), geoshm::ValidationError>(())
//! ```

pub mod error;
pub mod types;
pub mod geometry;
pub mod geojson;
pub mod store;
pub mod sample;
pub mod export;
pub mod config;
pub mod api;

pub use error::{Error, Result, ValidationError};
pub use types::{AttributeValue, LocationRecord, LocationSet, TurbineProperties};
pub use geometry::{
    compute_boundary, compute_bounds, compute_centroid, BoundaryPolygon, Bounds, LatLon, LonLat,
    MapFrame, FALLBACK_CENTROID,
};
pub use geojson::validate;
pub use store::{SessionId, SessionState, SessionStore};
pub use sample::SAMPLE_GEOJSON;
pub use config::ServerConfig;
