use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeaverError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    ApplicationError(String),
    #[error("{0}")]
    TransportError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Image decode error: {0}")]
    DecodeError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WeaverError {
    /// Text written to the page's error surface.
    pub fn user_message(&self) -> String {
        match self {
            WeaverError::ValidationError(msg) => msg.clone(),
            WeaverError::ApplicationError(msg) | WeaverError::TransportError(msg) => {
                format!("Error: {}", msg)
            }
            other => format!("Error: {}", other),
        }
    }
}

impl From<reqwest::Error> for WeaverError {
    fn from(err: reqwest::Error) -> Self {
        WeaverError::TransportError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WeaverError>;
