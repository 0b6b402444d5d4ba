use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::PathBuf;
use ypf_core::FinderConfig;
use ypf_finder::{build_cli, cli, load_document, Action, Status};
use ypf_resolve::OutputFormat;
use ypf_test_utils::{write_temp_yaml, HELLO_YAML};

fn matches(args: &[&str]) -> clap::ArgMatches {
    build_cli().try_get_matches_from(args).unwrap()
}

#[test]
fn test_query_action() {
    let m = matches(&["ypf", "query", "hello.from", "--file", "doc.yaml"]);
    assert_eq!(
        cli::action(&m),
        Some(Action::Query {
            query: "hello.from".into(),
            file: Some(PathBuf::from("doc.yaml")),
        })
    );
}

#[test]
fn test_keys_and_interactive_actions() {
    assert_eq!(cli::action(&matches(&["ypf", "keys"])), Some(Action::Keys { file: None }));
    assert_eq!(
        cli::action(&matches(&["ypf", "interactive", "-f", "x.yaml"])),
        Some(Action::Interactive {
            file: Some(PathBuf::from("x.yaml"))
        })
    );
}

#[test]
fn test_query_requires_argument() {
    assert!(build_cli().try_get_matches_from(["ypf", "query"]).is_err());
}

#[test]
fn test_default_config() {
    let config = cli::config(&matches(&["ypf", "keys"])).unwrap();
    assert_eq!(config, FinderConfig::new());
}

#[test]
fn test_flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_depth = 5\nformat = \"json\"\njson_indent = 4").unwrap();
    let path = file.path().to_str().unwrap();

    let m = matches(&["ypf", "keys", "--config", path, "--format", "text", "--max-depth", "9"]);
    let config = cli::config(&m).unwrap();

    assert_eq!(config.max_depth, 9);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.json_indent, 4);
}

#[test]
fn test_global_flags_before_subcommand() {
    let m = matches(&["ypf", "--format", "json", "query", "a"]);
    assert_eq!(cli::config(&m).unwrap().format, OutputFormat::Json);
}

#[test]
fn test_zero_depth_is_rejected() {
    let m = matches(&["ypf", "keys", "--max-depth", "0"]);
    assert!(cli::config(&m).is_err());
}

#[test]
fn test_missing_config_file_is_error() {
    let m = matches(&["ypf", "keys", "--config", "/no/such/ypf.toml"]);
    let err = cli::config(&m).unwrap_err();
    assert!(err.to_string().contains("/no/such/ypf.toml"));
}

#[test]
fn test_log_json_flag() {
    assert!(cli::log_json(&matches(&["ypf", "--log-json", "keys"])));
    assert!(!cli::log_json(&matches(&["ypf", "keys"])));
}

#[tokio::test]
async fn test_load_document_from_file() {
    let file = write_temp_yaml(HELLO_YAML);
    let loaded = load_document(Some(file.path()), &FinderConfig::new()).await.unwrap();
    assert_eq!(loaded.index().len(), 6);
}

#[tokio::test]
async fn test_run_query_exit_status() {
    let file = write_temp_yaml(HELLO_YAML);
    let path = file.path().to_str().unwrap();

    let found = ypf_finder::run(&matches(&["ypf", "query", "tool", "--file", path])).await.unwrap();
    let missing = ypf_finder::run(&matches(&["ypf", "query", "nope", "--file", path])).await.unwrap();

    assert_eq!(found, Status::Found);
    assert_eq!(missing, Status::NotFound);
}

#[tokio::test]
async fn test_run_reports_bad_document() {
    let file = write_temp_yaml("a: [\n");
    let path = file.path().to_str().unwrap();

    let status = ypf_finder::run(&matches(&["ypf", "keys", "--file", path])).await.unwrap();
    assert_eq!(status, Status::Failed);
    assert_eq!(status.code(), 2);
}
