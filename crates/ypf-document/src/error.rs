//! Error types for the parser adapter

use serde::Serialize;

/// Position in the source text reported by the YAML parser (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Line number
    pub line: usize,
    /// Column number
    pub column: usize,
}

/// Errors while turning YAML text into a [`Document`](crate::Document)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Malformed YAML
    #[error("syntax error: {message}")]
    Syntax {
        message: String,
        location: Option<Location>,
    },

    /// Input holds more than one YAML document
    #[error("expected a single YAML document, found {0}")]
    MultipleDocuments(usize),

    /// A mapping or sequence used as a map key
    #[error("unsupported non-scalar key under '{path}'")]
    UnsupportedKey { path: String },

    /// Merge keys (`<<`) could not be applied
    #[error("merge key error: {0}")]
    Merge(String),
}

impl ParseError {
    /// Create syntax error with optional position
    pub fn syntax(message: impl Into<String>, location: Option<Location>) -> Self {
        Self::Syntax {
            message: message.into(),
            location,
        }
    }

    /// Convert a `serde_yaml` error, keeping its position when reported
    #[must_use]
    pub fn from_yaml(err: &serde_yaml::Error) -> Self {
        let location = err.location().map(|loc| Location {
            line: loc.line(),
            column: loc.column(),
        });
        Self::syntax(err.to_string(), location)
    }

    /// Create unsupported key error for the map at `path` (empty for root)
    pub fn unsupported_key(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::UnsupportedKey {
            path: if path.is_empty() { "<root>".to_string() } else { path },
        }
    }

    /// Source position, for syntax errors that carry one
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::Syntax { location, .. } => *location,
            _ => None,
        }
    }
}
