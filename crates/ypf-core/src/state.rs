//! Application state and its transitions
//!
//! [`FinderState::apply`] is the only way state changes: it consumes the old
//! state and an event and returns the new state. Document and key index are
//! replaced together, so the index can never describe a previous document.

use crate::config::FinderConfig;
use crate::error::{FinderError, FinderResult};
use std::path::Path;
use ypf_document::{parse_document, Document, ParseError};
use ypf_index::KeyIndex;
use ypf_resolve::{resolve, Resolution};

/// Document shown when a session starts without input
pub const SAMPLE_SOURCE: &str = "hello:
  from:
    your:
      favourite:
        yaml:
          tool: 👋
";

/// A parsed document with the key index built from it
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    document: Document,
    index: KeyIndex,
}

impl LoadedDocument {
    /// Index a parsed document
    #[must_use]
    pub fn new(document: Document, config: &FinderConfig) -> Self {
        let index = KeyIndex::build_with_depth(&document, config.max_depth);
        Self { document, index }
    }

    /// Parse and index YAML text
    ///
    /// # Errors
    /// Returns the parser's [`ParseError`].
    pub fn parse(source: &str, config: &FinderConfig) -> Result<Self, ParseError> {
        Ok(Self::new(parse_document(source)?, config))
    }

    /// Read, parse and index a YAML file
    ///
    /// # Errors
    /// Returns [`FinderError::Io`] if the file cannot be read and
    /// [`FinderError::Parse`] if it is not a single valid document.
    pub fn open(path: impl AsRef<Path>, config: &FinderConfig) -> FinderResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| FinderError::io_error(path, e))?;
        Ok(Self::parse(&source, config)?)
    }

    /// Parsed document
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Key index of the document
    #[inline]
    #[must_use]
    pub fn index(&self) -> &KeyIndex {
        &self.index
    }

    /// Resolve a query against this document
    #[inline]
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<Resolution> {
        resolve(query, &self.document, &self.index)
    }
}

/// Input events, one per user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderEvent {
    /// Document text committed (editor lost focus)
    SourceCommitted(String),
    /// Search text changed
    QueryChanged(String),
}

/// Everything the front end shows
#[derive(Debug, Clone, PartialEq)]
pub struct FinderState {
    config: FinderConfig,
    /// Last committed text, even when it failed to parse
    source: String,
    loaded: LoadedDocument,
    query: String,
    last_error: Option<ParseError>,
}

impl FinderState {
    /// Start from YAML text
    ///
    /// # Errors
    /// Returns the parser's [`ParseError`].
    pub fn from_source(source: impl Into<String>, config: FinderConfig) -> Result<Self, ParseError> {
        let source = source.into();
        let loaded = LoadedDocument::parse(&source, &config)?;
        Ok(Self {
            config,
            source,
            loaded,
            query: String::new(),
            last_error: None,
        })
    }

    /// Start from the built-in sample document
    #[must_use]
    pub fn sample(config: FinderConfig) -> Self {
        match Self::from_source(SAMPLE_SOURCE, config.clone()) {
            Ok(state) => state,
            Err(err) => {
                tracing::error!(error = %err, "sample document failed to parse");
                Self::empty(config)
            }
        }
    }

    /// Start with a `null` document and no keys
    #[must_use]
    pub fn empty(config: FinderConfig) -> Self {
        let loaded = LoadedDocument::new(Document::null(), &config);
        Self {
            config,
            source: String::new(),
            loaded,
            query: String::new(),
            last_error: None,
        }
    }

    /// Apply an event, producing the next state
    ///
    /// - An empty commit changes nothing.
    /// - A commit that fails to parse keeps the previous document and index
    ///   and records the error.
    /// - A successful commit replaces document and index and clears the error.
    #[must_use]
    pub fn apply(self, event: FinderEvent) -> Self {
        match event {
            FinderEvent::SourceCommitted(source) => self.commit_source(source),
            FinderEvent::QueryChanged(query) => Self { query, ..self },
        }
    }

    fn commit_source(self, source: String) -> Self {
        if source.is_empty() {
            tracing::debug!("ignoring empty document commit");
            return self;
        }

        match LoadedDocument::parse(&source, &self.config) {
            Ok(loaded) => {
                tracing::info!(paths = loaded.index().len(), "document replaced");
                Self {
                    source,
                    loaded,
                    last_error: None,
                    ..self
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "document commit failed to parse, keeping previous document");
                Self {
                    source,
                    last_error: Some(err),
                    ..self
                }
            }
        }
    }

    /// Resolution of the current query against the current document
    ///
    /// Recomputed on every call; `None` while the query is empty.
    #[inline]
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        self.loaded.resolve(&self.query)
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Last committed text
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current document and index
    #[inline]
    #[must_use]
    pub fn loaded(&self) -> &LoadedDocument {
        &self.loaded
    }

    /// Current query
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Error from the most recent commit, if it failed
    #[inline]
    #[must_use]
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ypf_test_utils::HELLO_PATHS;

    #[test]
    fn sample_state_indexes_sample_document() {
        let state = FinderState::sample(FinderConfig::new());

        assert_eq!(state.loaded().index().iter().collect::<Vec<_>>(), HELLO_PATHS);
        assert_eq!(state.query(), "");
        assert!(state.resolution().is_none());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn empty_state_has_no_keys() {
        let state = FinderState::empty(FinderConfig::new());
        assert!(state.loaded().index().is_empty());
        assert_eq!(state.source(), "");
    }

    #[test]
    fn query_change_keeps_document() {
        let before = FinderState::sample(FinderConfig::new());
        let after = before.clone().apply(FinderEvent::QueryChanged("tool".into()));

        assert_eq!(after.loaded(), before.loaded());
        assert_eq!(after.query(), "tool");
    }

    #[test]
    fn depth_limit_comes_from_config() {
        let state = FinderState::sample(FinderConfig::new().with_max_depth(1));
        assert_eq!(state.loaded().index().iter().collect::<Vec<_>>(), ["hello"]);
        assert!(state.loaded().index().is_truncated());
    }
}
