//! Testing utilities for YAML Path Finder workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use std::io::Write;
use tempfile::NamedTempFile;
use ypf_document::{parse_document, Document};

/// Nested single-branch document from the tool's own help text.
pub const HELLO_YAML: &str = "hello:
  from:
    your:
      favourite:
        yaml:
          tool: 👋
";

/// Every path of [`HELLO_YAML`], in document order.
pub const HELLO_PATHS: [&str; 6] = [
    "hello",
    "hello.from",
    "hello.from.your",
    "hello.from.your.favourite",
    "hello.from.your.favourite.yaml",
    "hello.from.your.favourite.yaml.tool",
];

/// Service config with repeated leaf names, for ambiguous matches.
pub const SERVICES_YAML: &str = "services:
  api:
    host: api.internal
    port: 8080
    enabled: true
  worker:
    host: worker.internal
    port: 0
    enabled: false
    tags: [batch, nightly]
logging:
  level: info
  file: ''
";

/// Values that a truthiness check would treat as missing.
pub const FALSY_YAML: &str = "zero: 0
disabled: false
empty: ''
nothing: ~
";

pub fn document(yaml: &str) -> Document {
    parse_document(yaml).unwrap()
}

pub fn hello_document() -> Document {
    document(HELLO_YAML)
}

pub fn services_document() -> Document {
    document(SERVICES_YAML)
}

pub fn write_temp_yaml(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
