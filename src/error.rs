//! Unified error types for cpe-tools.
//!
//! Every failure is local and synchronous: binding either produces a complete
//! string or one of these errors, never a partial result.

use crate::model::Attribute;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cpe-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CpeError {
    /// Attribute name outside the eleven WFN attributes
    #[error("Invalid attribute name: '{0}' (expected one of: part, vendor, product, version, update, edition, language, sw_edition, target_sw, target_hw, other)")]
    InvalidAttribute(String),

    /// Logical value tag other than ANY or NA
    #[error("Invalid logical value: '{0}' (expected ANY or NA)")]
    InvalidLogicalValue(String),

    /// A WFN value could not be bound
    #[error("Failed to bind attribute '{attribute}': {source}")]
    Bind {
        attribute: Attribute,
        #[source]
        source: MalformedValueKind,
    },

    /// Batch input could not be read or decoded
    #[error("Invalid input {context}: {message}")]
    Input { context: String, message: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Ways a quoted WFN string can be malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedValueKind {
    #[error("value '{value}' ends with a lone escape character")]
    TrailingEscape { value: String },

    #[error("unquoted special character '{ch}' in value '{value}'")]
    UnquotedSpecial { ch: char, value: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for cpe-tools operations
pub type Result<T> = std::result::Result<T, CpeError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CpeError {
    /// Create a binding error for an attribute
    pub const fn bind(attribute: Attribute, source: MalformedValueKind) -> Self {
        Self::Bind { attribute, source }
    }

    /// Create an input error with context
    pub fn input(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Input {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The attribute a binding error refers to, if any
    #[must_use]
    pub const fn attribute(&self) -> Option<Attribute> {
        match self {
            Self::Bind { attribute, .. } => Some(*attribute),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CpeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}
