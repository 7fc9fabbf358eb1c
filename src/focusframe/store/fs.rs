use super::{decode_sessions, encode_sessions, SessionStore};
use crate::error::{FocusError, Result};
use crate::model::{SessionCollection, SessionRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_SESSIONS_FILE: &str = "sessions.json";

/// Sessions stored as a pretty-printed JSON array in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store using the default file name inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_SESSIONS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FocusError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = format!(".sessions-{}.tmp", Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> SessionCollection {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no session file yet");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable session file, treating as empty");
                return Vec::new();
            }
        };

        decode_sessions(&content, &self.location())
    }

    fn save(&mut self, sessions: &[SessionRecord]) -> Result<()> {
        self.ensure_parent()?;
        let content = encode_sessions(sessions)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(FocusError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(FocusError::Io(e));
        }

        debug!(path = %self.path.display(), count = sessions.len(), "saved sessions");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
