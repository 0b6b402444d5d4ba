//! Rendering of resolutions for display
//!
//! Text output is a headline, an optional hint, then the value or path list
//! as pretty JSON. JSON output is
//! the serialized [`Resolution`].

use crate::resolution::{MatchStrategy, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fmt::Write as _;
use ypf_document::to_json;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Formatting knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per indentation level in JSON output
    pub json_indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { json_indent: 2 }
    }
}

/// Render a resolution in the requested format
///
/// # Errors
/// Returns the JSON serializer error, which only occurs for values that
/// cannot be represented (never for normalized documents).
pub fn render(
    resolution: &Resolution,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => render_text(resolution, options),
        OutputFormat::Json => pretty_json(resolution, options.json_indent),
    }
}

fn render_text(resolution: &Resolution, options: RenderOptions) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    match resolution {
        Resolution::ExactMatch { path, value, .. } => {
            let _ = writeln!(out, "Found a value at path: {path}");
            out.push_str(&pretty_json(&to_json(value), options.json_indent)?);
        }
        Resolution::MultiMatch {
            query,
            strategy,
            paths,
        } => {
            let _ = writeln!(
                out,
                "Found {} keys {}: {query}",
                paths.len(),
                strategy.relation()
            );
            out.push_str("Narrow down your search to see the values for these keys.\n");
            out.push_str(&pretty_json(paths, options.json_indent)?);
        }
        Resolution::NotFound { query } => {
            let _ = write!(out, "Could not find anything for: {query}. We tried:");
            for (n, strategy) in MatchStrategy::ORDER.iter().enumerate() {
                let _ = write!(out, "\n  {}. Keys {} {query}", n + 1, strategy.relation());
            }
        }
    }
    Ok(out)
}

/// Pretty-print any serializable value with the given indentation
///
/// # Errors
/// Returns the serializer error for values JSON cannot represent.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
