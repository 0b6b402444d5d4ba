use ypf_finder::{build_cli, cli, logging, run, Status};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();
    logging::init(cli::log_json(&matches));

    let status = match run(&matches).await {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: {err:#}");
            Status::Failed
        }
    };

    std::process::exit(status.code());
}
