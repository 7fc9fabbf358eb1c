use chrono::Local;
use colored::Colorize;
use focusframe::api::{CmdMessage, DisplaySession, MessageLevel, StatsView, TimerPlan};
use focusframe::model::parse_timestamp;
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const DURATION_WIDTH: usize = 9;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> focusframe::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_stats(stats: &StatsView) {
    println!(
        "{} {}   {} {}",
        "Sessions:".dimmed(),
        stats.total_sessions.to_string().bold(),
        "Focused:".dimmed(),
        format_total(stats.total_hours, stats.total_minutes_remainder).bold()
    );
    println!();

    if stats.display_sessions.is_empty() {
        println!("No sessions recorded yet.");
        return;
    }

    for session in &stats.display_sessions {
        print_session_line(session);
    }
}

pub(crate) fn print_timer(plan: &TimerPlan) {
    println!(
        "{}",
        format!(
            "When you finish, record it with: focusframe save {} [notes]",
            plan.minutes
        )
        .dimmed()
    );
}

fn print_session_line(session: &DisplaySession) {
    let idx_str = format!("{:>4}. ", session.id);
    let duration_str = format!("{:>width$}", format!("{} min", session.duration), width = DURATION_WIDTH);
    let time_str = format_when(session);

    let fixed_width = idx_str.width() + DURATION_WIDTH + 2 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let notes: String = session
        .notes
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let notes_display = truncate_to_width(&notes, available);
    let padding = available.saturating_sub(notes_display.width());

    let duration_colored = if session.duration == 0 {
        duration_str.red()
    } else {
        duration_str.yellow()
    };

    println!(
        "{}{}  {}{}{}",
        idx_str.dimmed(),
        duration_colored,
        notes_display,
        " ".repeat(padding),
        time_str.dimmed()
    );
}

fn format_total(hours: u64, minutes: u64) -> String {
    if hours == 0 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

fn format_when(session: &DisplaySession) -> String {
    let text = match parse_timestamp(&session.timestamp) {
        Some(created) => {
            let elapsed = Local::now().signed_duration_since(created);
            Formatter::new().convert(elapsed.to_std().unwrap_or_default())
        }
        None => session.date.clone(),
    };
    format!("{:>width$}", text, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_notes() {
        let out = truncate_to_width("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert_eq!(out.width(), 5);
    }

    #[test]
    fn short_notes_untouched() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
    }

    #[test]
    fn total_formatting() {
        assert_eq!(format_total(0, 45), "45m");
        assert_eq!(format_total(2, 5), "2h 5m");
    }

    #[test]
    fn unparseable_timestamp_falls_back_to_date() {
        let session = DisplaySession {
            id: 1,
            duration: 25,
            notes: String::new(),
            timestamp: "not a time".into(),
            date: "2024-01-01 10:00".into(),
        };
        assert_eq!(format_when(&session).trim(), "2024-01-01 10:00");
    }
}
