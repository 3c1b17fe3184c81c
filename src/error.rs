use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    // Input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read {}: {}", path.display(), source)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // Analyzer contract
    #[error("Analyzer returned no '{0}' score")]
    MissingScore(&'static str),

    // Pass-through from dependencies
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
