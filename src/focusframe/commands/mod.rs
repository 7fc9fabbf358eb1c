use crate::config::FocusConfig;
use crate::model::SessionRecord;
use serde::Serialize;

pub mod clear;
pub mod config;
pub mod create;
pub mod start;
pub mod stats;

pub use start::TimerPlan;
pub use stats::{DisplaySession, StatsView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_sessions: Vec<SessionRecord>,
    pub stats: Option<StatsView>,
    pub timer: Option<TimerPlan>,
    pub config: Option<FocusConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_sessions(mut self, sessions: Vec<SessionRecord>) -> Self {
        self.affected_sessions = sessions;
        self
    }

    pub fn with_stats(mut self, stats: StatsView) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_timer(mut self, timer: TimerPlan) -> Self {
        self.timer = Some(timer);
        self
    }

    pub fn with_config(mut self, config: FocusConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The first message, used as the boundary `message`.
    pub fn headline(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
