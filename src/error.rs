use thiserror::Error;

use crate::providers::google::GoogleError;

#[derive(Debug, Error)]
pub enum AdoptError {
    #[error(transparent)]
    Google(#[from] GoogleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
