use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for doctool operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for doctool operations
#[derive(Debug)]
pub enum DoctoolError {
    /// IO error wrapper
    Io(io::Error),
    /// Table of contents processing error
    Toc(String),
    /// Resource embedding error
    Embed(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for DoctoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctoolError::Io(err) => write!(f, "IO error: {}", err),
            DoctoolError::Toc(msg) => write!(f, "TOC error: {}", msg),
            DoctoolError::Embed(msg) => write!(f, "Embed error: {}", msg),
            DoctoolError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for DoctoolError {}

impl From<io::Error> for DoctoolError {
    fn from(err: io::Error) -> Self {
        DoctoolError::Io(err)
    }
}

impl From<String> for DoctoolError {
    fn from(msg: String) -> Self {
        DoctoolError::Generic(msg)
    }
}

impl From<&str> for DoctoolError {
    fn from(msg: &str) -> Self {
        DoctoolError::Generic(msg.to_string())
    }
}
