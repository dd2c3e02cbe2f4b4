use thiserror::Error;

use crate::config::MIB;
use crate::prediction::round_two;

/// Pre-flight rejection of the selected file. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select an image first")]
    Missing,
    #[error("Please select a valid image file (JPG, JPEG, PNG)")]
    UnsupportedType { media_type: String },
    #[error("File size must be less than {}", size_label(*.limit))]
    TooLarge { size: u64, limit: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Network error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Server error: {status} - {body}")]
    Http { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("An analysis is already in progress")]
    InFlight,
    #[error("Result discarded because the selected image changed")]
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Http,
    Parse,
    InFlight,
    Discarded,
}

impl PredictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::Validation(_) => ErrorKind::Validation,
            PredictError::Transport(_) => ErrorKind::Transport,
            PredictError::Http { .. } => ErrorKind::Http,
            PredictError::Parse(_) => ErrorKind::Parse,
            PredictError::InFlight => ErrorKind::InFlight,
            PredictError::Discarded => ErrorKind::Discarded,
        }
    }

    /// Whether the error was raised locally, before any request was sent.
    pub fn is_pre_flight(&self) -> bool {
        matches!(self, PredictError::Validation(_) | PredictError::InFlight)
    }
}

/// Human-readable size: `5MB`, `1.5MB`, `512KB`, `900 bytes`.
pub fn size_label(bytes: u64) -> String {
    const KIB: u64 = 1024;
    if bytes >= MIB {
        format!("{}MB", round_two(bytes as f64 / MIB as f64))
    } else if bytes >= KIB {
        format!("{}KB", round_two(bytes as f64 / KIB as f64))
    } else {
        format!("{} bytes", bytes)
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        PredictError::Parse(err.to_string())
    }
}
