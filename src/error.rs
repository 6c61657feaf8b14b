use thiserror::Error;

#[derive(Error, Debug)]
pub enum NlcmdError {
    #[error("Completion request failed: {0}")]
    Completion(String),

    #[error("{0} not found. Please set it in the environment or in a .env file.")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read confirmation: {0}")]
    PromptError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NlcmdError>;
