//! YPF Core - session state for YAML Path Finder
//!
//! Holds the one piece of mutable application state, the current
//! (source, document, key index, query) tuple, as an explicit
//! [`FinderState`] value. Front ends feed it [`FinderEvent`]s and read the
//! current [`Resolution`](ypf_resolve::Resolution) back.
//!
//! # Example
//!
//! ```rust
//! use ypf_core::{FinderConfig, FinderEvent, FinderState};
//!
//! let state = FinderState::sample(FinderConfig::new())
//!     .apply(FinderEvent::SourceCommitted("a:\n  b: 1\n".into()))
//!     .apply(FinderEvent::QueryChanged("b".into()));
//!
//! let resolution = state.resolution().unwrap();
//! assert!(resolution.is_found());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod state;

pub use config::FinderConfig;
pub use error::{ConfigError, FinderError};
pub use state::{FinderEvent, FinderState, LoadedDocument, SAMPLE_SOURCE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
