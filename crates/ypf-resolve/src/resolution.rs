//! Resolution outcomes

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use ypf_document::Value;

/// How a query was matched against the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Structural walk along the query's segments
    Exact,
    /// Index paths ending with the query
    Suffix,
    /// Index paths beginning with the query
    Prefix,
}

impl MatchStrategy {
    /// Strategies in the order they are tried
    pub const ORDER: [Self; 3] = [Self::Exact, Self::Suffix, Self::Prefix];

    /// Relation between a matched key and the query, as shown to users
    #[must_use]
    pub fn relation(self) -> &'static str {
        match self {
            Self::Exact => "that were exactly",
            Self::Suffix => "ending with",
            Self::Prefix => "beginning with",
        }
    }
}

impl Display for MatchStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Suffix => "suffix",
            Self::Prefix => "prefix",
        };
        f.write_str(name)
    }
}

/// Outcome of resolving a non-empty query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// A single path resolved to a value
    ExactMatch {
        /// Full dotted path of the value
        path: String,
        /// Strategy that identified the path
        strategy: MatchStrategy,
        /// Value at the path (may be a nested structure)
        value: Value,
    },

    /// Several index paths matched; the query must be narrowed
    MultiMatch {
        /// Query as entered
        query: String,
        /// Strategy that produced the matches
        strategy: MatchStrategy,
        /// Matched paths in document order
        paths: Vec<String>,
    },

    /// No strategy matched
    NotFound {
        /// Query as entered
        query: String,
    },
}

impl Resolution {
    /// Whether a value was found
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::ExactMatch { .. })
    }

    /// Found value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::ExactMatch { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Strategy that produced this outcome (`None` when not found)
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> Option<MatchStrategy> {
        match self {
            Self::ExactMatch { strategy, .. } | Self::MultiMatch { strategy, .. } => Some(*strategy),
            Self::NotFound { .. } => None,
        }
    }
}
