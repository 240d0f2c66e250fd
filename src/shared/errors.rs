use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid portal configuration: {0}")]
    Config(String),

    #[error("Scroll listener error: {0}")]
    Listener(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
