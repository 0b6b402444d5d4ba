//! YPF Document
//!
//! The parser adapter and in-memory document model for YAML Path Finder.
//!
//! # Core Concepts
//!
//! - [`Document`]: Normalized YAML tree (string-keyed maps, sequences, scalars)
//! - [`KeyPath`]: Dot-separated address of a map entry
//! - [`parse_document`]: YAML text → [`Document`], or a [`ParseError`]
//! - [`to_json`]: JSON view of a value, used when rendering matches
//!
//! # Example
//!
//! ```rust
//! use ypf_document::{parse_document, KeyPath};
//!
//! let doc = parse_document("server:\n  port: 8080\n").unwrap();
//! let port = doc.get(&KeyPath::parse("server.port"));
//! assert_eq!(port.and_then(|v| v.as_u64()), Some(8080));
//! ```

#![warn(unreachable_pub)]

mod document;
mod error;
mod json;
mod parser;
mod path;

pub use document::{key_text, Document};
pub use error::{Location, ParseError};
pub use json::to_json;
pub use parser::parse_document;
pub use path::KeyPath;

/// Raw YAML value type backing a [`Document`]
pub use serde_yaml::{Mapping, Value};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
