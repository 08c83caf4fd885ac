//! Error types for the langseg library.
//!
//! All fallible operations return [`LangsegError`] through the [`Result`]
//! alias. Only two kinds of failure are meant to reach a caller of the
//! public segmentation API: pipeline construction failures (which leave the
//! registry entry retryable) and batch-level I/O failures. Analyzer failures
//! during a single call are absorbed by the segmentation session.
//!
//! # Examples
//!
//! ```
//! use langseg::error::{LangsegError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LangsegError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::language::Language;

/// The main error type for langseg operations.
#[derive(Error, Debug)]
pub enum LangsegError {
    /// I/O errors (batch input/output, stopword files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis errors raised by a tokenizer or filter while producing tokens
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A pipeline could not be built. The registry entry stays retryable.
    #[error("Pipeline construction failed for {language}: {message}")]
    Construction { language: Language, message: String },

    /// A required external resource (dictionary, stopword list) is missing or unreadable
    #[error("Resource error: {0}")]
    Resource(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation for the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Error with context attached, rendered with its whole cause chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LangsegError.
pub type Result<T> = std::result::Result<T, LangsegError>;

impl LangsegError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LangsegError::Analysis(msg.into())
    }

    /// Create a new construction error for the given language.
    pub fn construction<S: Into<String>>(language: Language, msg: S) -> Self {
        LangsegError::Construction {
            language,
            message: msg.into(),
        }
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        LangsegError::Resource(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LangsegError::Config(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        LangsegError::InvalidOperation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LangsegError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LangsegError::Other(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LangsegError::Other(msg.into())
    }

    /// Whether this error leaves the failing component retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LangsegError::Construction { .. } | LangsegError::Resource(_) | LangsegError::Io(_)
        )
    }
}
