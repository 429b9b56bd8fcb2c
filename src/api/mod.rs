//! HTTP API for the map page: upload, framing, export and the sample file

pub mod models;
pub mod handlers;
pub mod routes;

pub use routes::create_router;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::store::SessionStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: SessionStore, max_upload_bytes: usize) -> Self {
        Self {
            store,
            max_upload_bytes,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionStore::default(), DEFAULT_MAX_UPLOAD_BYTES)
    }
}
