use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("scheduler error: {0}")]
    Schedule(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Result type alias for reporter operations
pub type Result<T> = std::result::Result<T, ReporterError>;

impl ReporterError {
    /// Creates a new transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new scheduler error
    pub fn schedule<S: Into<String>>(msg: S) -> Self {
        Self::Schedule(msg.into())
    }

    /// Returns true if a later scheduled cycle may succeed without
    /// operator intervention
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Io(_))
    }

    /// Returns the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Config(_) | Self::ConfigParse(_) => "config",
            Self::Schedule(_) => "schedule",
            Self::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ReporterError::transport("connection refused");
        assert_eq!(err.to_string(), "transport error: connection refused");
        assert_eq!(err.category(), "transport");
    }

    #[test]
    fn test_error_recoverability() {
        assert!(ReporterError::transport("send failed").is_recoverable());
        assert!(!ReporterError::config("bad prefix").is_recoverable());
        assert!(!ReporterError::schedule("already started").is_recoverable());
    }
}
