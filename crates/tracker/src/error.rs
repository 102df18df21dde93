use codec::CodecError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Stored value for '{key}' is unreadable: {message}")]
    CorruptValue { key: String, message: String },

    #[error("No profile has been entered yet")]
    MissingProfile,
}

impl TrackerError {
    /// True for errors caused by a malformed or outdated code the user supplied
    pub fn is_bad_code(&self) -> bool {
        matches!(
            self,
            TrackerError::Codec(CodecError::InvalidCode(_) | CodecError::UnsupportedVersion { .. })
        )
    }
}
