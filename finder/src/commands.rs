//! One-shot `query` and `keys` commands

use ypf_core::{FinderConfig, LoadedDocument};
use ypf_index::KeyIndex;
use ypf_resolve::{render, render::pretty_json, OutputFormat, Resolution};

/// Process exit status of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A value was found, or several keys were listed
    Found,
    /// Nothing matched, or the query was empty
    NotFound,
    /// The document or config could not be read
    Failed,
}

impl Status {
    /// Exit code for the process
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Found => 0,
            Self::NotFound => 1,
            Self::Failed => 2,
        }
    }
}

/// Text to print and the status to exit with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Rendered result, without trailing newline
    pub text: String,
    /// Exit status
    pub status: Status,
}

/// Resolve `query` once
///
/// # Errors
/// Returns the JSON serializer error from rendering.
pub fn query(loaded: &LoadedDocument, query: &str, config: &FinderConfig) -> Result<Output, serde_json::Error> {
    let Some(resolution) = loaded.resolve(query) else {
        tracing::debug!("empty query");
        return Ok(Output {
            text: String::new(),
            status: Status::NotFound,
        });
    };

    let status = match &resolution {
        Resolution::NotFound { .. } => Status::NotFound,
        Resolution::ExactMatch { .. } | Resolution::MultiMatch { .. } => Status::Found,
    };
    Ok(Output {
        text: render(&resolution, config.format, config.render_options())?,
        status,
    })
}

/// List every indexed path
///
/// # Errors
/// Returns the JSON serializer error from rendering.
pub fn keys(loaded: &LoadedDocument, config: &FinderConfig) -> Result<Output, serde_json::Error> {
    Ok(Output {
        text: render_keys(loaded.index(), config)?,
        status: Status::Found,
    })
}

/// Index paths as text lines or a JSON array
///
/// # Errors
/// Returns the JSON serializer error.
pub fn render_keys(index: &KeyIndex, config: &FinderConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Text => Ok(index.iter().collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => pretty_json(&index.iter().collect::<Vec<_>>(), config.json_indent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ypf_test_utils::SERVICES_YAML;

    fn services() -> LoadedDocument {
        LoadedDocument::parse(SERVICES_YAML, &FinderConfig::new()).unwrap()
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Status::Found.code(), 0);
        assert_eq!(Status::NotFound.code(), 1);
        assert_eq!(Status::Failed.code(), 2);
    }

    #[test]
    fn multi_match_counts_as_found() {
        let output = query(&services(), "port", &FinderConfig::new()).unwrap();
        assert_eq!(output.status, Status::Found);
        assert!(output.text.starts_with("Found 2 keys ending with: port"));
    }

    #[test]
    fn miss_and_empty_query_are_not_found() {
        let config = FinderConfig::new();
        assert_eq!(query(&services(), "missing", &config).unwrap().status, Status::NotFound);
        assert_eq!(query(&services(), "", &config).unwrap().status, Status::NotFound);
    }

    #[test]
    fn keys_as_json_array() {
        let config = FinderConfig::new().with_format(OutputFormat::Json);
        let loaded = LoadedDocument::parse("a:\n  b: 1\n", &config).unwrap();

        assert_eq!(keys(&loaded, &config).unwrap().text, "[\n  \"a\",\n  \"a.b\"\n]");
    }
}
