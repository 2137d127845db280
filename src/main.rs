//! Content query binary entry point.
//!
//! Runs one content query and prints the `{data, meta}` JSON to stdout.
//! All logs go to stderr so stdout stays machine-readable.
//!
//! Coverage is excluded because `main` reads the process environment and
//! exits the process; the pieces it wires together are tested in the library.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use newsroom_content::cli::{execute, help_text, CommandOutput, ContentCommand};
use newsroom_content::config::{log_level_from_env, Config};
use newsroom_content::content::ContentApi;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match ContentCommand::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{}", help_text());
            std::process::exit(2);
        }
    };

    if command == ContentCommand::Help {
        println!("{}", help_text());
        return;
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        base_url = %config.content_api_url,
        timeout_ms = config.request_timeout_ms,
        credentials = config.has_service_credentials(),
        "Configuration loaded"
    );

    let api = match ContentApi::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    match execute(&api, command).await {
        Ok(output) => print_output(&output),
        Err(e) => {
            tracing::error!(status = e.status(), code = %e.code(), "Query failed: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn init_tracing() {
    // Reads `.env` first so LOG_LEVEL from the file reaches the filter.
    let filter = log_level_from_env()
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn print_output(output: &CommandOutput) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
