use thiserror::Error;

/// Unified error type for git-promote operations
#[derive(Error, Debug)]
pub enum GitPromoteError {
    #[error("Branch parsing error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External tool failed: {0}")]
    Tool(String),

    #[error("Push rejected: {0}")]
    Push(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-promote
pub type Result<T> = std::result::Result<T, GitPromoteError>;

impl GitPromoteError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        GitPromoteError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitPromoteError::Config(msg.into())
    }

    /// Create an external tool error with context
    pub fn tool(msg: impl Into<String>) -> Self {
        GitPromoteError::Tool(msg.into())
    }

    /// Create a push error with context
    pub fn push(msg: impl Into<String>) -> Self {
        GitPromoteError::Push(msg.into())
    }
}
