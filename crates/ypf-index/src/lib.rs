//! YPF Key Index
//!
//! Flattened, insertion-ordered index of the dotted map paths in a
//! [`Document`](ypf_document::Document), with radix tree prefix and suffix
//! lookup.
//!
//! # Example
//!
//! ```rust
//! use ypf_document::parse_document;
//! use ypf_index::KeyIndex;
//!
//! let doc = parse_document("server:\n  host: a\n  port: 1\n").unwrap();
//! let index = KeyIndex::build(&doc);
//!
//! assert_eq!(index.iter().collect::<Vec<_>>(), ["server", "server.host", "server.port"]);
//! assert_eq!(index.suffix_matches("port"), ["server.port"]);
//! ```

#![warn(missing_docs)]

mod index;

pub use index::{KeyIndex, DEFAULT_MAX_DEPTH};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
