use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactsError {
    #[error("UnsupportedPlatform: no firewall detection for platform '{0}'")]
    UnsupportedPlatform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FactsError>;
