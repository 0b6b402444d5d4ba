//! Path resolver
//!
//! Pure function of (query, document, index): nothing is cached or mutated,
//! so the same inputs always give the same [`Resolution`].

use crate::resolution::{MatchStrategy, Resolution};
use ypf_document::{Document, KeyPath};
use ypf_index::KeyIndex;

/// Resolve `query` against the document and its key index
///
/// Returns `None` for an empty query. Otherwise the first strategy in
/// [`MatchStrategy::ORDER`] that yields anything wins.
#[must_use]
pub fn resolve(query: &str, document: &Document, index: &KeyIndex) -> Option<Resolution> {
    if query.is_empty() {
        return None;
    }

    let resolution = MatchStrategy::ORDER
        .into_iter()
        .find_map(|strategy| attempt(strategy, query, document, index))
        .unwrap_or_else(|| Resolution::NotFound {
            query: query.to_string(),
        });

    tracing::debug!(query, strategy = ?resolution.strategy(), "resolved query");
    Some(resolution)
}

fn attempt(
    strategy: MatchStrategy,
    query: &str,
    document: &Document,
    index: &KeyIndex,
) -> Option<Resolution> {
    let candidates = match strategy {
        MatchStrategy::Exact => return walk(query, strategy, document),
        MatchStrategy::Suffix => index.suffix_matches(query),
        MatchStrategy::Prefix => index.prefix_matches(query),
    };

    match candidates.as_slice() {
        [] => None,
        [single] => {
            let found = walk(single, strategy, document);
            if found.is_none() {
                // Keys containing '.' are indexed but cannot be walked.
                tracing::debug!(path = single, %strategy, "single candidate is not walkable");
            }
            found
        }
        many => Some(Resolution::MultiMatch {
            query: query.to_string(),
            strategy,
            paths: many.iter().map(|path| (*path).to_string()).collect(),
        }),
    }
}

/// Structural walk; presence of every key decides, not the value
fn walk(dotted: &str, strategy: MatchStrategy, document: &Document) -> Option<Resolution> {
    let value = document.get(&KeyPath::parse(dotted))?;
    Some(Resolution::ExactMatch {
        path: dotted.to_string(),
        strategy,
        value: value.clone(),
    })
}
