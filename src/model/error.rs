use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the report pipeline.
///
/// `Transport`, `Status` and `Decode` are all transport failures: any of them
/// aborts the surrounding retrieval and no partial report is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("username \"{0}\" not found")]
    Validation(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request to `{url}` failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response from `{url}`: {message}")]
    Decode { url: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to render report: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Decode { .. }
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value.to_string())
    }
}
