use thiserror::Error;

/// Wizard-level errors using thiserror for structured error handling.
///
/// None of these are fatal: the lifecycle logs them and leaves its state
/// untouched. They are returned so callers that care can react.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Sequence is empty, call set_sequence before show_popup")]
    EmptySequence,

    #[error("Cannot replace the sequence while a wizard is {0}")]
    SequenceLocked(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = WizardError::EmptySequence;
        assert_eq!(
            err.to_string(),
            "Sequence is empty, call set_sequence before show_popup"
        );

        let err = WizardError::SequenceLocked("presented");
        assert_eq!(
            err.to_string(),
            "Cannot replace the sequence while a wizard is presented"
        );

        let err = WizardError::UnknownCommand("jump".to_string());
        assert_eq!(err.to_string(), "Unknown command: jump");
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}
