//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every UI (the bundled CLI, or an HTTP front end).
//!
//! `FocusApi<S: SessionStore>` owns its store, so there is no process-wide state:
//! - Production: `FocusApi<FileStore>`
//! - Testing: `FocusApi<InMemoryStore>`
//!
//! ## Boundary Results
//!
//! Front ends that speak JSON want `{"success": true, "message": ...}` or
//! `{"success": false, "error": ...}`. [`Outcome::from_result`] produces that
//! shape and classifies failures as bad input or internal errors.

use crate::commands;
use crate::config::FocusConfig;
use crate::error::{FocusError, Result};
use crate::model::RawDuration;
use crate::store::SessionStore;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The main API facade for focusframe operations.
pub struct FocusApi<S: SessionStore> {
    store: S,
    config_dir: PathBuf,
    config: FocusConfig,
}

impl<S: SessionStore> FocusApi<S> {
    pub fn new(store: S, config_dir: PathBuf, config: FocusConfig) -> Self {
        Self {
            store,
            config_dir,
            config,
        }
    }

    /// Totals and history. Never fails: unreadable storage reads as no sessions.
    pub fn stats(&self) -> commands::StatsView {
        commands::stats::summarize(&self.store.load())
    }

    pub fn stats_result(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn save_session(
        &mut self,
        raw_duration: impl Into<RawDuration>,
        raw_notes: Option<&str>,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, &raw_duration.into(), raw_notes)
    }

    pub fn clear_sessions(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn start_timer(&self, minutes: i64) -> Result<CmdResult> {
        commands::start::run(minutes, self.config.max_timer_minutes)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Class of a boundary result, mirroring HTTP 200 / 400 / 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Ok,
    BadRequest,
    Internal,
}

/// Success flag plus a message or an error string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    #[serde(skip)]
    pub kind: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    pub fn from_result(result: &Result<CmdResult>) -> Self {
        match result {
            Ok(res) => Self {
                success: true,
                kind: OutcomeKind::Ok,
                message: res.headline().map(str::to_string),
                error: None,
            },
            Err(e) => Self::from_error(e),
        }
    }

    pub fn from_error(e: &FocusError) -> Self {
        let kind = if e.is_client_error() {
            OutcomeKind::BadRequest
        } else {
            OutcomeKind::Internal
        };
        Self {
            success: false,
            kind,
            message: None,
            error: Some(e.to_string()),
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplaySession, MessageLevel, StatsView, TimerPlan};
