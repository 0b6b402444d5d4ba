//! YPF Finder - front end for YAML Path Finder
//!
//! The `ypf` binary is a thin wrapper around [`run`]; the pieces are public
//! so they can be driven from tests with in-memory input and output.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod interactive;
pub mod logging;

use anyhow::Context;
use clap::ArgMatches;
use std::path::Path;
use tokio::io::{AsyncReadExt, BufReader};
use ypf_core::{FinderConfig, FinderError, FinderState, LoadedDocument};

pub use cli::{build_cli, Action};
pub use commands::{Output, Status};
pub use interactive::run_session;

/// Read a document from `file`, or from stdin when absent
///
/// # Errors
/// Returns [`FinderError::Io`] or [`FinderError::Parse`].
pub async fn load_document(file: Option<&Path>, config: &FinderConfig) -> Result<LoadedDocument, FinderError> {
    let source = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FinderError::io_error(path, e))?,
        None => {
            let mut source = String::new();
            tokio::io::stdin()
                .read_to_string(&mut source)
                .await
                .map_err(|e| FinderError::io_error("<stdin>", e))?;
            source
        }
    };
    Ok(LoadedDocument::parse(&source, config)?)
}

/// Execute parsed command-line arguments, returning the exit status
///
/// Document problems are reported on stderr and map to [`Status::Failed`];
/// only output failures are returned as errors.
///
/// # Errors
/// Fails on invalid configuration or when stdout cannot be written.
pub async fn run(matches: &ArgMatches) -> anyhow::Result<Status> {
    let config = cli::config(matches)?;
    let Some(action) = cli::action(matches) else {
        anyhow::bail!("no command given");
    };
    tracing::debug!(?action, ?config, "starting");

    match action {
        Action::Query { query, file } => {
            let loaded = match load_document(file.as_deref(), &config).await {
                Ok(loaded) => loaded,
                Err(err) => return Ok(report_failure(&err)),
            };
            let output = commands::query(&loaded, &query, &config).context("failed to render result")?;
            Ok(print(output))
        }
        Action::Keys { file } => {
            let loaded = match load_document(file.as_deref(), &config).await {
                Ok(loaded) => loaded,
                Err(err) => return Ok(report_failure(&err)),
            };
            let output = commands::keys(&loaded, &config).context("failed to render keys")?;
            Ok(print(output))
        }
        Action::Interactive { file } => {
            let state = match file {
                Some(path) => {
                    let source = match tokio::fs::read_to_string(&path).await {
                        Ok(source) => source,
                        Err(err) => return Ok(report_failure(&FinderError::io_error(path, err))),
                    };
                    match FinderState::from_source(source, config) {
                        Ok(state) => state,
                        Err(err) => return Ok(report_failure(&err.into())),
                    }
                }
                None => FinderState::sample(config),
            };
            let stdin = BufReader::new(tokio::io::stdin());
            run_session(state, stdin, tokio::io::stdout()).await?;
            Ok(Status::Found)
        }
    }
}

fn print(output: Output) -> Status {
    if !output.text.is_empty() {
        println!("{}", output.text);
    }
    output.status
}

fn report_failure(err: &FinderError) -> Status {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("error: {err}");
    Status::Failed
}
