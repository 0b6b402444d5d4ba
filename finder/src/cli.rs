//! Command-line definition and config merging

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use ypf_core::FinderConfig;
use ypf_resolve::OutputFormat;

/// What the user asked the binary to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Resolve one query and exit
    Query {
        /// Query text, used verbatim
        query: String,
        /// Document file, stdin when absent
        file: Option<PathBuf>,
    },
    /// Print every indexed path and exit
    Keys {
        /// Document file, stdin when absent
        file: Option<PathBuf>,
    },
    /// Line-oriented session
    Interactive {
        /// Starting document, the sample document when absent
        file: Option<PathBuf>,
    },
}

fn file_arg() -> Arg {
    Arg::new("file")
        .long("file")
        .short('f')
        .value_parser(value_parser!(PathBuf))
        .help("YAML document to load")
}

/// Build the `ypf` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("ypf")
        .version(ypf_core::VERSION)
        .about("Find values in YAML documents by dotted key path")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .value_parser(["text", "json"])
                .help("Output format"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Map levels the key index descends"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write diagnostics to stderr as JSON lines"),
        )
        .subcommand(
            Command::new("query")
                .about("Resolve a query once")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .help("Dotted key path, or a suffix or prefix of one"),
                )
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("keys")
                .about("List every key path in the document")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("interactive")
                .about("Edit a document and run queries line by line")
                .arg(file_arg()),
        )
}

/// Extract the subcommand
///
/// `None` only when no known subcommand was given, which the command
/// definition already rejects.
#[must_use]
pub fn action(matches: &ArgMatches) -> Option<Action> {
    let (name, args) = matches.subcommand()?;
    let file = args.get_one::<PathBuf>("file").cloned();
    match name {
        "query" => Some(Action::Query {
            query: args.get_one::<String>("query").cloned().unwrap_or_default(),
            file,
        }),
        "keys" => Some(Action::Keys { file }),
        "interactive" => Some(Action::Interactive { file }),
        _ => None,
    }
}

/// Build the effective config: defaults, then `--config`, then flags
///
/// # Errors
/// Fails if the config file cannot be loaded or the merged values are out of
/// range.
pub fn config(matches: &ArgMatches) -> anyhow::Result<FinderConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => FinderConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => FinderConfig::new(),
    };

    if let Some(format) = matches.get_one::<String>("format") {
        config = config.with_format(parse_format(format));
    }
    if let Some(max_depth) = matches.get_one::<usize>("max-depth") {
        config = config.with_max_depth(*max_depth);
    }

    config.validate().context("invalid command-line options")?;
    Ok(config)
}

/// Whether diagnostics should be JSON lines
#[must_use]
pub fn log_json(matches: &ArgMatches) -> bool {
    matches.get_flag("log-json")
}

fn parse_format(name: &str) -> OutputFormat {
    match name {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
