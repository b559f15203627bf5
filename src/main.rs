use anyhow::Result;
use clap::Parser;
use job_recommender::cli::{handle_command, Cli};
use job_recommender::utils::open_log_file;
use job_recommender::ConfigManager;
use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = ConfigManager::load(cli.config.as_deref())?;

    // Logs go to a file so the terminal only shows the form
    let file = open_log_file(&config.logging.path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    tracing::info!(
        environment = %config.environment,
        api_url = %config.service.api_url,
        log_path = %config.logging.path.display(),
        "Starting job recommender"
    );

    handle_command(cli, config).await
}
