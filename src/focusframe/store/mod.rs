//! # Storage Layer
//!
//! Sessions live in a single JSON array that is always rewritten whole. The
//! [`SessionStore`] trait hides where that array lives.
//!
//! ## Read Semantics
//!
//! `load` cannot fail. A missing file, an unreadable file or content that is not a
//! JSON array all load as an empty collection. Inside the array each entry is
//! decoded on its own: wrong-typed fields fall back to defaults, and entries that
//! are not objects are skipped. Corruption is logged, never returned.
//!
//! ## Write Semantics
//!
//! `save` replaces the entire collection. Write failures (permissions, full disk)
//! are the only storage errors a caller ever sees.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── sessions.json       # Session collection (JSON array)
//! └── config.json         # Configuration
//! ```

use crate::error::{FocusError, Result};
use crate::model::{SessionCollection, SessionRecord};
use serde_json::Value;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// Abstract interface for session storage.
pub trait SessionStore {
    /// Load every session in creation order. Never fails.
    fn load(&self) -> SessionCollection;

    /// Replace the stored collection with `sessions`.
    fn save(&mut self, sessions: &[SessionRecord]) -> Result<()>;

    /// Remove every session.
    fn clear(&mut self) -> Result<()> {
        self.save(&[])
    }

    /// Where the sessions live, for messages and diagnostics.
    fn location(&self) -> String;
}

/// Parse stored content. Anything but a JSON array is empty.
pub(crate) fn decode_sessions(content: &str, origin: &str) -> SessionCollection {
    let entries = match serde_json::from_str::<Vec<Value>>(content) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(origin, error = %e, "malformed session data, treating as empty");
            return Vec::new();
        }
    };

    let mut sessions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<SessionRecord>(entry) {
            Ok(session) => sessions.push(session),
            Err(e) => warn!(origin, index, error = %e, "skipping entry that is not a session"),
        }
    }
    debug!(origin, count = sessions.len(), "loaded sessions");
    sessions
}

/// Pretty-printed JSON with 2-space indentation.
pub(crate) fn encode_sessions(sessions: &[SessionRecord]) -> Result<String> {
    serde_json::to_string_pretty(sessions).map_err(FocusError::Serialization)
}
