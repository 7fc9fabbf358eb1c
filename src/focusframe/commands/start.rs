use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FocusError, Result};
use crate::model::DATE_FORMAT;
use chrono::{DateTime, Duration, Local, TimeZone};
use serde::Serialize;

/// A validated countdown, ready to be run by a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerPlan {
    pub minutes: u32,
    pub ends_at: String,
}

pub fn run(minutes: i64, max_minutes: u32) -> Result<CmdResult> {
    run_at(minutes, max_minutes, &Local::now())
}

pub fn run_at<Tz: TimeZone>(minutes: i64, max_minutes: u32, now: &DateTime<Tz>) -> Result<CmdResult>
where
    Tz::Offset: std::fmt::Display,
{
    if minutes <= 0 || minutes > i64::from(max_minutes) {
        return Err(FocusError::InvalidTimerLength {
            minutes,
            max: max_minutes,
        });
    }

    let ends = now.clone() + Duration::minutes(minutes);
    let plan = TimerPlan {
        minutes: minutes as u32,
        ends_at: ends.format(DATE_FORMAT).to_string(),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Focus for {} minutes, until {}.",
        plan.minutes, plan.ends_at
    )));
    Ok(result.with_timer(plan))
}
