use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error(
        "{kind} from a newer version ({found}, this build reads up to {supported}). Please update the app."
    )]
    UnsupportedVersion {
        kind: &'static str,
        found: u32,
        supported: u32,
    },

    #[error("Cannot encode: {0}")]
    InvalidInput(String),
}

impl CodecError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidCode(message.into())
    }
}
