use super::{decode_sessions, encode_sessions, SessionStore};
use crate::error::{FocusError, Result};
use crate::model::{SessionCollection, SessionRecord};

/// In-memory storage for testing.
///
/// Keeps the serialized form rather than the decoded records so reads go through
/// the same lenient decoding as [`super::fs::FileStore`].
pub struct InMemoryStore {
    content: Option<String>,
    simulate_write_error: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            content: None,
            simulate_write_error: false,
        }
    }

    /// Start from raw stored content, which may be corrupt.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// The last content written, exactly as it would appear on disk.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl SessionStore for InMemoryStore {
    fn load(&self) -> SessionCollection {
        match &self.content {
            Some(content) => decode_sessions(content, "memory"),
            None => Vec::new(),
        }
    }

    fn save(&mut self, sessions: &[SessionRecord]) -> Result<()> {
        if self.simulate_write_error {
            return Err(FocusError::Store("Simulated write error".to_string()));
        }
        self.content = Some(encode_sessions(sessions)?);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://sessions".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RawDuration;

    /// Builds a store holding sessions with the given durations, in order.
    pub fn store_with_durations<I>(durations: I) -> InMemoryStore
    where
        I: IntoIterator,
        I::Item: Into<RawDuration>,
    {
        let sessions: Vec<SessionRecord> = durations
            .into_iter()
            .enumerate()
            .map(|(i, d)| SessionRecord {
                id: i as u64 + 1,
                duration: Some(d.into()),
                notes: format!("session {}", i + 1),
                timestamp: format!("2024-01-0{}T09:00:00.000000", (i % 9) + 1),
                date: format!("2024-01-0{} 09:00", (i % 9) + 1),
                ..Default::default()
            })
            .collect();

        let mut store = InMemoryStore::new();
        store.save(&sessions).expect("in-memory save");
        store
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::store_with_durations;
    use super::*;
    use crate::model::RawDuration;

    #[test]
    fn empty_store_loads_empty() {
        assert!(InMemoryStore::new().load().is_empty());
    }

    #[test]
    fn corrupt_content_loads_empty() {
        assert!(InMemoryStore::with_content("{not json").load().is_empty());
        assert!(InMemoryStore::with_content("{\"id\": 1}").load().is_empty());
        assert!(InMemoryStore::with_content("").load().is_empty());
    }

    #[test]
    fn wrong_typed_field_keeps_the_rest_of_the_file() {
        let store = InMemoryStore::with_content(
            r#"[
  {"id": 1, "duration": 25, "notes": null, "timestamp": "", "date": ""},
  {"id": 2, "duration": 50, "notes": "keep me", "timestamp": "", "date": ""}
]"#,
        );
        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].notes, "");
        assert_eq!(loaded[1].notes, "keep me");
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let store = InMemoryStore::with_content(
            r#"[42, {"id": 1, "duration": 25}, "junk", {"id": 2, "duration": 5}]"#,
        );
        let ids: Vec<u64> = store.load().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn round_trip_preserves_order_and_values() {
        let store = store_with_durations([
            RawDuration::Minutes(25),
            RawDuration::from("bad"),
            RawDuration::Minutes(50),
        ]);
        let loaded = store.load();
        let mut copy = InMemoryStore::new();
        copy.save(&loaded).unwrap();
        assert_eq!(copy.load(), loaded);
        assert_eq!(loaded[1].duration, Some(RawDuration::Text("bad".into())));
    }

    #[test]
    fn simulated_write_error_keeps_previous_content() {
        let mut store = store_with_durations([10i64]);
        store.set_simulate_write_error(true);
        assert!(store.clear().is_err());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn clear_then_load_is_empty() {
        let mut store = store_with_durations([10i64, 20, 30]);
        store.clear().unwrap();
        assert!(store.load().is_empty());
        assert_eq!(store.content(), Some("[]"));
    }
}
