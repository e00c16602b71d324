use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the PaperPilot client
#[derive(Debug, Error)]
pub enum PaperPilotError {
    #[error("Please provide at least one input: PDF files, DOIs, or URLs")]
    MissingInput,

    #[error("Only PDF files are supported: {0}")]
    UnsupportedFile(PathBuf),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("No selected file at position {index} ({count} selected)")]
    InvalidSelection { index: usize, count: usize },

    #[error("An analysis request is already in progress")]
    RequestInFlight,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Analysis failed: {message}")]
    Backend { status: u16, message: String },

    #[error("Failed to decode analysis response: {0}")]
    MalformedResponse(String),

    #[error("Audio file not found on server: {0}")]
    AudioNotFound(String),

    #[error("Invalid audio file name: {0}")]
    InvalidAudioName(String),

    #[error("No analysis results stored yet")]
    NoStoredResult,

    #[error("Stored analysis results at {path} are unreadable: {reason}")]
    StoredResultInvalid { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type specific to PaperPilot operations
pub type PaperPilotResult<T> = Result<T, PaperPilotError>;

/// Errors the user can act on, and what they should do about them
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for PaperPilotError {
    fn is_recoverable(&self) -> bool {
        !matches!(self, PaperPilotError::Config(_) | PaperPilotError::Io(_))
    }

    fn recovery_strategy(&self) -> Option<String> {
        let hint = match self {
            PaperPilotError::MissingInput =>
                "Pass --file, --dois or --urls, or run `paperpilot upload --interactive`.",
            PaperPilotError::UnsupportedFile(_) => "Only PDF files are supported.",
            PaperPilotError::RequestInFlight => "Wait for the current analysis to finish.",
            PaperPilotError::Network(_) =>
                "Network error. Please check your connection and try again.",
            PaperPilotError::Timeout(_) => "Request timed out. Please try again with fewer papers.",
            PaperPilotError::NoStoredResult | PaperPilotError::StoredResultInvalid { .. } =>
                "Run `paperpilot upload` to analyze some papers first.",
            PaperPilotError::AudioNotFound(_) =>
                "The server may have discarded old audio; run a new analysis.",
            PaperPilotError::Config(_) =>
                "Check the config file and the PAPERPILOT_* environment variables.",
            PaperPilotError::Io(_) => "Check file permissions and free disk space.",
            _ => {
                return None;
            }
        };
        Some(hint.to_string())
    }
}
