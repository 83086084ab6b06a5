use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for fontmeta
#[derive(Debug, Error)]
pub enum Error {
    /// A read or seek needed more bytes than the data holds
    #[error("unexpected end of data: requested {requested} bytes, {available} available")]
    UnexpectedEof { requested: usize, available: usize },
    /// The declared table count does not fit in the file
    #[error("malformed table directory: {num_tables} tables need {required} bytes, file has {available}")]
    MalformedDirectory {
        num_tables: u16,
        required: usize,
        available: usize,
    },
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// `true` for errors caused by the contents of a font file, as opposed to
    /// the environment it was read from.
    pub fn is_malformed_font(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEof { .. } | Error::MalformedDirectory { .. }
        )
    }
}

/// Result type alias for fontmeta operations
pub type Result<T> = std::result::Result<T, Error>;
