use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// A form submission failed validation. The message is the alert shown to the user.
    #[error("Invalid input")]
    InvalidInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Command error: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
