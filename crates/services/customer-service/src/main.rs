//! Customer Service - command-line front end for customer records.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppError;
use customer_service_lib::{cli::Cli, config::CustomerServiceConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let result = match CustomerServiceConfig::from_env() {
        Ok(config) => {
            tracing::debug!(?config, "Configuration loaded");
            customer_service_lib::run(cli.command, config).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::debug!(code = e.code(), "Command failed: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Input the user can correct exits with 2, everything else with 1
fn exit_code(error: &AppError) -> i32 {
    if error.is_recoverable() {
        2
    } else {
        1
    }
}

/// Initialize tracing subscriber; logs go to stderr so stdout stays clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
