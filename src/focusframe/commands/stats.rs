use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::SessionRecord;
use crate::store::SessionStore;
use serde::Serialize;
use tracing::warn;

/// A session prepared for display, with its duration already coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySession {
    pub id: u64,
    pub duration: u64,
    pub notes: String,
    pub timestamp: String,
    pub date: String,
}

impl From<&SessionRecord> for DisplaySession {
    fn from(record: &SessionRecord) -> Self {
        Self {
            id: record.id,
            duration: record.minutes(),
            notes: record.notes.clone(),
            timestamp: record.timestamp.clone(),
            date: record.date.clone(),
        }
    }
}

/// Summary of a session collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub total_sessions: usize,
    pub total_minutes_raw: u64,
    pub total_hours: u64,
    pub total_minutes_remainder: u64,
    /// Newest first.
    pub display_sessions: Vec<DisplaySession>,
}

pub fn summarize(sessions: &[SessionRecord]) -> StatsView {
    let malformed = sessions
        .iter()
        .filter(|s| s.has_malformed_duration())
        .count();
    if malformed > 0 {
        warn!(malformed, "sessions with unusable durations counted as 0 minutes");
    }

    // Saturates: create accepts any positive i64, so a few huge entries could overflow.
    let total_minutes_raw = sessions
        .iter()
        .map(SessionRecord::minutes)
        .fold(0u64, u64::saturating_add);

    StatsView {
        total_sessions: sessions.len(),
        total_minutes_raw,
        total_hours: total_minutes_raw / 60,
        total_minutes_remainder: total_minutes_raw % 60,
        display_sessions: sessions.iter().rev().map(DisplaySession::from).collect(),
    }
}

pub fn run<S: SessionStore>(store: &S) -> Result<CmdResult> {
    let sessions = store.load();
    Ok(CmdResult::default().with_stats(summarize(&sessions)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::RawDuration;
    use crate::store::memory::fixtures::store_with_durations;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn empty_collection() {
        let view = summarize(&[]);
        assert_eq!(view.total_sessions, 0);
        assert_eq!(view.total_hours, 0);
        assert_eq!(view.total_minutes_remainder, 0);
        assert!(view.display_sessions.is_empty());
    }

    #[test]
    fn malformed_duration_counts_as_zero() {
        let store = store_with_durations([
            RawDuration::Minutes(25),
            RawDuration::from("bad"),
            RawDuration::Minutes(50),
        ]);
        let view = summarize(&store.load());

        assert_eq!(view.total_sessions, 3);
        assert_eq!(view.total_minutes_raw, 75);
        assert_eq!(view.total_hours, 1);
        assert_eq!(view.total_minutes_remainder, 15);

        let ids: Vec<u64> = view.display_sessions.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        let durations: Vec<u64> = view.display_sessions.iter().map(|s| s.duration).collect();
        assert_eq!(durations, vec![50, 0, 25]);
    }

    #[test]
    fn numeric_strings_are_summed() {
        let store = store_with_durations(["30", " 45 "]);
        let view = summarize(&store.load());
        assert_eq!(view.total_minutes_raw, 75);
        assert_eq!(view.display_sessions[0].duration, 45);
    }

    #[test]
    fn other_json_types_and_missing_fields_count_as_zero() {
        let store = InMemoryStore::with_content(
            json!([
                {"id": 1, "duration": 60, "notes": "", "timestamp": "", "date": ""},
                {"id": 2, "duration": null, "notes": "", "timestamp": "", "date": ""},
                {"id": 3, "duration": [1, 2], "notes": "", "timestamp": "", "date": ""},
                {"id": 4, "notes": "no duration"},
                {"id": 5, "duration": 7.9},
            ])
            .to_string(),
        );
        let view = summarize(&store.load());
        assert_eq!(view.total_sessions, 5);
        assert_eq!(view.total_minutes_raw, 60);
        assert_eq!(view.total_hours, 1);
        assert_eq!(view.total_minutes_remainder, 0);
        assert!(view.display_sessions[..4].iter().all(|s| s.duration == 0));
    }

    #[test]
    fn corrupt_store_gives_empty_stats() {
        let store = InMemoryStore::with_content("[{\"id\": 1,");
        let result = run(&store).unwrap();
        assert_eq!(result.stats, Some(StatsView::default()));
    }

    #[test]
    fn huge_durations_saturate_instead_of_overflowing() {
        let mut store = InMemoryStore::new();
        for _ in 0..3 {
            create::run(&mut store, &RawDuration::from("9223372036854775807"), None).unwrap();
        }
        let view = summarize(&store.load());

        assert_eq!(view.total_sessions, 3);
        assert_eq!(view.total_minutes_raw, u64::MAX);
        assert_eq!(view.total_hours, u64::MAX / 60);
        assert_eq!(view.total_minutes_remainder, u64::MAX % 60);
        assert_eq!(view.display_sessions[0].duration, i64::MAX as u64);
    }

    #[test]
    fn null_notes_record_survives_a_new_session() {
        let mut store = InMemoryStore::with_content(
            json!([
                {"id": 1, "duration": 25, "notes": null, "timestamp": "", "date": ""},
                {"id": 2, "duration": 50, "notes": "keep me", "timestamp": "", "date": "", "tag": "x"},
            ])
            .to_string(),
        );
        create::run(&mut store, &RawDuration::Minutes(10), None).unwrap();

        let view = summarize(&store.load());
        assert_eq!(view.total_sessions, 3);
        assert_eq!(view.total_minutes_raw, 85);
        let notes: Vec<&str> = view.display_sessions.iter().map(|s| s.notes.as_str()).collect();
        assert_eq!(notes, vec!["", "keep me", ""]);
        assert_eq!(view.display_sessions[0].id, 3);
        assert!(store.content().unwrap().contains("\"tag\": \"x\""));
    }

    #[test]
    fn hours_split_is_exact() {
        let store = store_with_durations([60i64, 60, 59]);
        let view = summarize(&store.load());
        assert_eq!((view.total_hours, view.total_minutes_remainder), (2, 59));
    }
}
