//! JSON view of YAML values
//!
//! Matched values are shown as JSON. Map order is preserved and non-finite
//! floats (`.nan`, `.inf`) become `null`, the way `JSON.stringify` treats them.

use crate::document::key_text;
use serde_json::{Map, Number, Value as Json};
use serde_yaml::Value;

/// Convert a YAML value to JSON
#[must_use]
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::from(i)
            } else if let Some(u) = n.as_u64() {
                Json::from(u)
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map_or(Json::Null, Json::Number)
            }
        }
        Value::String(s) => Json::String(s.clone()),
        Value::Sequence(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Mapping(map) => {
            let object: Map<String, Json> = map
                .iter()
                .filter_map(|(key, value)| Some((key_text(key)?, to_json(value))))
                .collect();
            Json::Object(object)
        }
        Value::Tagged(tagged) => to_json(&tagged.value),
    }
}
