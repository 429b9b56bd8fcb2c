//! Session-scoped shared state for uploaded location sets

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use crossbeam::queue::SegQueue;
use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

use crate::types::LocationSet;

/// Opaque 128-bit session identifier, rendered as 32 lowercase hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u128);

impl SessionId {
    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(rand::random())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Session id text was not 32 hex digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSessionId;

impl fmt::Display for InvalidSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session id must be 32 hexadecimal characters")
    }
}

impl std::error::Error for InvalidSessionId {}

impl FromStr for SessionId {
    type Err = InvalidSessionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidSessionId);
        }
        u128::from_str_radix(s, 16).map(Self).map_err(|_| InvalidSessionId)
    }
}

/// What one session currently holds
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    /// Last successfully validated upload
    pub locations: Option<LocationSet>,
    /// File name of that upload, if the client sent one
    pub source_name: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Shared store of per-session state
///
/// Cloning yields another handle to the same sessions. Writes replace a
/// session's location set wholesale; the oldest sessions are evicted once
/// `max_sessions` is reached.
pub struct SessionStore {
    sessions: Arc<DashMap<SessionId, SessionState>>,
    order: Arc<SegQueue<SessionId>>,
    max_sessions: usize,
}

impl SessionStore {
    /// Creates an empty store
    ///
    /// # Arguments
    /// * `max_sessions` - Maximum number of sessions kept at once
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            order: Arc::new(SegQueue::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Replaces the session's location set (last write wins)
    pub fn commit(&self, id: &SessionId, locations: LocationSet, source_name: Option<String>) {
        if !self.sessions.contains_key(id) {
            self.evict_for_insert();
            self.order.push(*id);
        }

        debug!(session = %id, records = locations.len(), "committing location set");

        self.sessions.insert(
            *id,
            SessionState {
                locations: Some(locations),
                source_name,
                last_updated: Some(Utc::now()),
            },
        );
    }

    /// Snapshot of the session's state
    pub fn get(&self, id: &SessionId) -> Option<SessionState> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// The session's current location set, if any
    pub fn locations(&self, id: &SessionId) -> Option<LocationSet> {
        self.sessions.get(id).and_then(|entry| entry.value().locations.clone())
    }

    /// Drops the session's location set; returns whether there was one
    pub fn clear(&self, id: &SessionId) -> bool {
        match self.sessions.get_mut(id) {
            Some(mut entry) => {
                let had = entry.locations.take().is_some();
                entry.source_name = None;
                entry.last_updated = Some(Utc::now());
                had
            }
            None => false,
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns whether no session exists
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns store statistics
    pub fn stats(&self) -> StoreStats {
        let total_records = self
            .sessions
            .iter()
            .filter_map(|entry| entry.value().locations.as_ref().map(LocationSet::len))
            .sum();

        StoreStats {
            session_count: self.sessions.len(),
            total_records,
            max_sessions: self.max_sessions,
        }
    }

    fn evict_for_insert(&self) {
        while self.sessions.len() >= self.max_sessions {
            match self.order.pop() {
                Some(old) => {
                    debug!(session = %old, "evicting session");
                    self.sessions.remove(&old);
                }
                None => break,
            }
        }
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            order: Arc::clone(&self.order),
            max_sessions: self.max_sessions,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// Store statistics
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    /// Number of sessions currently held
    pub session_count: usize,
    /// Records across all held location sets
    pub total_records: usize,
    /// Maximum number of sessions
    pub max_sessions: usize,
}
