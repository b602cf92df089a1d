use std::io;
use thiserror::Error;

/// Custom error type for quota-tray
#[derive(Error, Debug)]
pub enum QuotaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Quota tool not found: {0}")]
    ToolNotFound(String),

    #[error("{0} did not exit normally")]
    ProcessAbnormalExit(String),

    #[error("Malformed quota line: {0}")]
    MalformedLine(String),

    #[error("Host registration error: {0}")]
    Host(String),
}

/// Result type alias for quota-tray
pub type Result<T> = std::result::Result<T, QuotaError>;

impl QuotaError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        QuotaError::Config(msg.into())
    }

    pub fn tool_not_found<S: Into<String>>(tool: S) -> Self {
        QuotaError::ToolNotFound(tool.into())
    }

    pub fn abnormal_exit<S: Into<String>>(tool: S) -> Self {
        QuotaError::ProcessAbnormalExit(tool.into())
    }

    pub fn malformed_line<S: Into<String>>(reason: S) -> Self {
        QuotaError::MalformedLine(reason.into())
    }

    pub fn host<S: Into<String>>(msg: S) -> Self {
        QuotaError::Host(msg.into())
    }
}
