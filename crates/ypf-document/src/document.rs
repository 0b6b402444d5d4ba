//! Normalized YAML document
//!
//! A [`Document`] is the parsed tree with JSON-compatible keys: every map key
//! is a string, merge keys are applied and custom tags are stripped.

use crate::error::ParseError;
use crate::json::to_json;
use crate::path::KeyPath;
use serde_yaml::{Mapping, Value};

/// Current parsed YAML value
///
/// Always replaced wholesale; lookups never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Normalize a raw YAML value into a document
    ///
    /// # Errors
    /// Returns [`ParseError::Merge`] if `<<` keys cannot be applied and
    /// [`ParseError::UnsupportedKey`] for mapping or sequence keys.
    pub fn from_value(mut root: Value) -> Result<Self, ParseError> {
        root.apply_merge()
            .map_err(|e| ParseError::Merge(e.to_string()))?;
        let root = normalize(root, &mut Vec::new())?;
        Ok(Self { root })
    }

    /// Document whose root is `null` (no keys)
    #[inline]
    #[must_use]
    pub fn null() -> Self {
        Self { root: Value::Null }
    }

    /// Root value
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Root mapping, if the document is a map
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        self.root.as_mapping()
    }

    /// Walk the document along `path`, following each segment as a map key
    ///
    /// Succeeds when every segment names an existing entry, whatever the
    /// value is (`0`, `false`, `""` and `null` are all found). An empty path
    /// yields the root.
    #[must_use]
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.iter() {
            match current {
                Value::Mapping(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Walk the document along a dotted path
    #[inline]
    #[must_use]
    pub fn get_dotted(&self, dotted: &str) -> Option<&Value> {
        self.get(&KeyPath::parse(dotted))
    }

    /// JSON view of the whole document
    #[inline]
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        to_json(&self.root)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::null()
    }
}

/// Textual form of a scalar map key
///
/// Returns `None` for mapping and sequence keys.
#[must_use]
pub fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Tagged(tagged) => key_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn normalize(value: Value, path: &mut Vec<String>) -> Result<Value, ParseError> {
    match value {
        Value::Tagged(tagged) => normalize(tagged.value, path),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| normalize(item, path))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        Value::Mapping(map) => {
            let mut normalized = Mapping::with_capacity(map.len());
            for (key, value) in map {
                let key = key_text(&key).ok_or_else(|| ParseError::unsupported_key(path.join(".")))?;
                path.push(key.clone());
                let value = normalize(value, path)?;
                path.pop();
                // Colliding keys ("1" and 1) keep the first position, last value.
                normalized.insert(Value::String(key), value);
            }
            Ok(Value::Mapping(normalized))
        }
        scalar => Ok(scalar),
    }
}
