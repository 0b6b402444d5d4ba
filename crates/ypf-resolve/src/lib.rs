//! YPF Resolve
//!
//! Turns a user query into a [`Resolution`] against the current document and
//! its key index, then renders it for display.
//!
//! # Resolution order
//!
//! 1. Empty query → no result
//! 2. Exact structural walk along the dot-separated segments
//! 3. Suffix match over the key index (one hit → its value, several → listing)
//! 4. Prefix match, same rules
//! 5. Not found
//!
//! # Example
//!
//! ```rust
//! use ypf_document::parse_document;
//! use ypf_index::KeyIndex;
//! use ypf_resolve::{resolve, MatchStrategy, Resolution};
//!
//! let doc = parse_document("hello:\n  from:\n    tool: x\n").unwrap();
//! let index = KeyIndex::build(&doc);
//!
//! match resolve("tool", &doc, &index) {
//!     Some(Resolution::ExactMatch { path, strategy, .. }) => {
//!         assert_eq!(path, "hello.from.tool");
//!         assert_eq!(strategy, MatchStrategy::Suffix);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod render;
mod resolution;
mod resolver;

pub use render::{render, OutputFormat, RenderOptions};
pub use resolution::{MatchStrategy, Resolution};
pub use resolver::resolve;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
