//! Error types for the Sheep command line

use thiserror::Error;

/// Errors that can occur reading edits
#[derive(Error, Debug)]
pub enum SheepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, SheepError>;
