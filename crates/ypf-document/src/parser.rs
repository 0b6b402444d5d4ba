//! YAML text parser
//!
//! Uses `serde_yaml` for the YAML grammar (anchors, aliases, merge keys) and
//! normalizes the result into a [`Document`].

use crate::document::Document;
use crate::error::ParseError;
use serde::Deserialize;
use serde_yaml::Value;

/// Parse YAML text into a document
///
/// Text holding no document at all (empty, or only comments) yields a `null`
/// document with no keys.
///
/// # Errors
/// Returns [`ParseError::Syntax`] for malformed YAML,
/// [`ParseError::MultipleDocuments`] when the text holds more than one
/// document, and the normalization errors of [`Document::from_value`].
pub fn parse_document(content: &str) -> Result<Document, ParseError> {
    let mut documents = Vec::new();
    for doc in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(doc).map_err(|e| ParseError::from_yaml(&e))?;
        documents.push(value);
    }

    if documents.len() > 1 {
        return Err(ParseError::MultipleDocuments(documents.len()));
    }

    let document = match documents.pop() {
        Some(root) => Document::from_value(root)?,
        None => Document::null(),
    };
    tracing::debug!(bytes = content.len(), "parsed YAML document");
    Ok(document)
}
