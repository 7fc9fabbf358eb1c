use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FocusError, Result};
use crate::model::{RawDuration, SessionRecord};
use crate::store::SessionStore;
use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

/// Validate input and build the next record for `existing`. Nothing is persisted.
pub fn create_record(
    raw_duration: &RawDuration,
    raw_notes: Option<&str>,
    existing: &[SessionRecord],
) -> Result<SessionRecord> {
    create_record_at(raw_duration, raw_notes, existing, &Local::now())
}

/// [`create_record`] with an explicit clock.
pub fn create_record_at<Tz: TimeZone>(
    raw_duration: &RawDuration,
    raw_notes: Option<&str>,
    existing: &[SessionRecord],
    now: &DateTime<Tz>,
) -> Result<SessionRecord>
where
    Tz::Offset: std::fmt::Display,
{
    let minutes = match raw_duration.input_minutes() {
        Some(n) if n > 0 => n,
        _ => return Err(FocusError::InvalidDuration(describe(raw_duration))),
    };
    let notes = raw_notes.unwrap_or_default().trim().to_string();
    let id = existing.len() as u64 + 1;

    Ok(SessionRecord::new(id, minutes, notes, now))
}

pub fn run<S: SessionStore>(
    store: &mut S,
    raw_duration: &RawDuration,
    raw_notes: Option<&str>,
) -> Result<CmdResult> {
    let mut sessions = store.load();
    let record = create_record(raw_duration, raw_notes, &sessions)?;
    debug!(id = record.id, minutes = record.minutes(), "recording session");

    sessions.push(record.clone());
    store.save(&sessions)?;

    let mut result = CmdResult::default().with_affected_sessions(vec![record]);
    result.add_message(CmdMessage::success("Session saved successfully!"));
    Ok(result)
}

fn describe(raw: &RawDuration) -> String {
    match raw {
        RawDuration::Minutes(n) => format!("{} (must be a positive number of minutes)", n),
        RawDuration::Text(s) => format!("{:?} (must be a positive number of minutes)", s),
        RawDuration::Other(v) => format!("{} (must be a positive number of minutes)", v),
    }
}
