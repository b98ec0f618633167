use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use decision_journal::adapters::RestDecisionApi;
use decision_journal::cli::{self, Cli};
use decision_journal::config::{AppConfig, LogFormat, LoggingConfig};
use decision_journal::ports::DecisionApi;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let rest_config = match config.api.rest_config() {
        Ok(rest_config) => rest_config,
        Err(e) => {
            error!(error = %e, "Invalid API configuration");
            return ExitCode::FAILURE;
        }
    };
    let api: Arc<dyn DecisionApi> = match RestDecisionApi::new(rest_config) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            error!(error = %e, "Failed to build API client");
            return ExitCode::FAILURE;
        }
    };
    info!(base_url = %config.api.base_url, "Decision journal client ready");

    match cli::run(cli, api, &config.display).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to print result");
                ExitCode::FAILURE
            }
        },
        Err(notice) => {
            eprintln!("{}", notice);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
