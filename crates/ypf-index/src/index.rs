//! Key index with radix tree
//!
//! Provides [`KeyIndex`] for insertion-ordered listing plus prefix and suffix
//! lookup using radix_trie.

use indexmap::IndexSet;
use radix_trie::{Trie, TrieCommon};
use ypf_document::{Document, Mapping, Value};

/// Map levels indexed when no explicit limit is given
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Dotted paths of every map key reachable through map levels
///
/// We keep three views of the same set:
/// - `paths`: insertion order, for listing and for ordering matches
/// - `forward`: radix trie keyed by path, for prefix lookups
/// - `reversed`: radix trie keyed by reversed path, for suffix lookups
///
/// Both tries map to the path's position in `paths`. The index is always
/// rebuilt from a document, never patched.
#[derive(Debug, Clone)]
pub struct KeyIndex {
    paths: IndexSet<String>,
    forward: Trie<String, usize>,
    reversed: Trie<String, usize>,
    truncated: bool,
}

impl KeyIndex {
    /// Create empty index
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: IndexSet::new(),
            forward: Trie::new(),
            reversed: Trie::new(),
            truncated: false,
        }
    }

    /// Index a document with the default depth limit
    #[inline]
    #[must_use]
    pub fn build(document: &Document) -> Self {
        Self::build_with_depth(document, DEFAULT_MAX_DEPTH)
    }

    /// Index a document, descending at most `max_depth` map levels
    ///
    /// Sequences and scalars end a branch: their own path is indexed, their
    /// contents are not. Maps below `max_depth` are skipped and the index is
    /// marked truncated.
    #[must_use]
    pub fn build_with_depth(document: &Document, max_depth: usize) -> Self {
        let mut index = Self::new();
        if let Some(root) = document.as_mapping() {
            if max_depth == 0 {
                index.truncated = !root.is_empty();
            } else {
                index.collect(root, None, 1, max_depth);
            }
        }

        if index.truncated {
            tracing::warn!(max_depth, "key index truncated at depth limit");
        }
        tracing::debug!(paths = index.len(), "built key index");
        index
    }

    fn collect(&mut self, map: &Mapping, parent: Option<&str>, depth: usize, max_depth: usize) {
        for (key, value) in map {
            let Some(key) = key.as_str() else {
                continue;
            };
            let path = match parent {
                Some(parent) => format!("{parent}.{key}"),
                None => key.to_string(),
            };

            if let Value::Mapping(child) = value {
                if depth < max_depth {
                    self.collect_child(path, child, depth, max_depth);
                    continue;
                }
                self.truncated |= !child.is_empty();
            }
            self.insert(path);
        }
    }

    fn collect_child(&mut self, path: String, child: &Mapping, depth: usize, max_depth: usize) {
        self.insert(path.clone());
        self.collect(child, Some(&path), depth + 1, max_depth);
    }

    fn insert(&mut self, path: String) {
        if self.paths.contains(&path) {
            return;
        }
        let position = self.paths.len();
        // Empty paths are only reachable through the empty query, served from `paths`.
        if !path.is_empty() {
            self.forward.insert(path.clone(), position);
            self.reversed.insert(reverse(&path), position);
        }
        self.paths.insert(path);
    }

    /// Check if path is in the index
    #[inline]
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Paths in insertion (document) order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Get total path count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if index is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether the depth limit cut off part of the document
    #[inline]
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Paths beginning with `query`, in insertion order
    #[must_use]
    pub fn prefix_matches(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return self.iter().collect();
        }
        let positions = descendants(&self.forward, query);
        self.select(positions, |path| path.starts_with(query))
    }

    /// Paths ending with `query`, in insertion order
    #[must_use]
    pub fn suffix_matches(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return self.iter().collect();
        }
        let positions = descendants(&self.reversed, &reverse(query));
        self.select(positions, |path| path.ends_with(query))
    }

    fn select(&self, mut positions: Vec<usize>, matches: impl Fn(&str) -> bool) -> Vec<&str> {
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|position| self.paths.get_index(position))
            .map(String::as_str)
            .filter(|path| matches(path))
            .collect()
    }
}

impl Default for KeyIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for KeyIndex {
    fn eq(&self, other: &Self) -> bool {
        self.truncated == other.truncated && self.paths.iter().eq(other.paths.iter())
    }
}

impl Eq for KeyIndex {}

/// Positions of every key under `key` in the trie
fn descendants(trie: &Trie<String, usize>, key: &str) -> Vec<usize> {
    trie.get_raw_descendant(key)
        .map(|subtrie| subtrie.values().copied().collect())
        .unwrap_or_default()
}

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
