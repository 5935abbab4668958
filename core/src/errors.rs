use musadora_types::DecodingError;
use thiserror::Error;

/// Errors that can occur with finding the config directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Unable to find the config directory for musadora.")]
    Config,
}

/// Errors that can occur while loading a library response.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodingError),
}

impl From<serde_json::Error> for LibraryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decoding(DecodingError::Json(e))
    }
}
