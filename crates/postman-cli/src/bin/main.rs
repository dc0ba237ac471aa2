//! generate-postman - Postman collection generator
//!
//! Fetches `<url>/api-docs` from a running server and writes the OpenAPI
//! document out as a Postman Collection v2.1 file.
//!
//! Usage:
//!   generate-postman
//!   generate-postman --url http://localhost:8080
//!   generate-postman --url http://localhost:8080 --output phonehub.postman.json

use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::debug;

use postman_cli::{write_failure, Args, CliError, Config};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse_lenient(std::env::args()) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from(args);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            report_failure(&config, &CliError::Io {
                path: ".".into(),
                source: e,
            });
            return ExitCode::FAILURE;
        }
    };

    match postman_cli::run(&config, &cwd).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&config, &e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(config: &Config, err: &CliError) {
    debug!("Run failed: {:?}", err);
    let _ = write_failure(&mut std::io::stderr().lock(), &config.base_url, err);
}
