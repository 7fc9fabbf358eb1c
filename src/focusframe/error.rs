use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocusError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid timer length: {minutes} minutes (allowed 1-{max})")]
    InvalidTimerLength { minutes: i64, max: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FocusError {
    /// True for failures caused by the caller's input rather than the storage medium.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FocusError::InvalidDuration(_)
                | FocusError::InvalidTimerLength { .. }
                | FocusError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FocusError>;
