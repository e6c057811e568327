//! Error types for sitemap-builder
//!
//! Rendering never fails. Errors only come from converting loosely typed
//! input (for example a change frequency read from front matter) into the
//! crate's typed records.

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text that is not one of the sitemap protocol change frequencies
    UnknownChangeFrequency { value: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChangeFrequency { value } => {
                write!(f, "unknown change frequency: {value:?}")
            }
        }
    }
}

/// Main error type for sitemap-builder
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for sitemap-builder
pub type Result<T> = std::result::Result<T, Error>;
