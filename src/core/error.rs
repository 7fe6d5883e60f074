use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DevRadarError>;

/// Every failure a command can hit. The `Display` text is what the user sees.
#[derive(Debug, Error)]
pub enum DevRadarError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid package.json: {0}")]
    Parse(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response; carries the server message when one was sent.
    #[error("{0}")]
    Api(String),

    #[error("Invalid response from DevRadar API: {0}")]
    InvalidResponse(String),
}

impl DevRadarError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api(message.into())
    }

    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse(message.into())
    }
}
