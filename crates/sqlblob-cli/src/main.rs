mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use sqlblob_config::Config;
use sqlblob_storage::SqlBackend;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr; stdout carries object payloads
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let kind = cli.backend.unwrap_or(config.storage.backend);
    let dsn = cli.dsn.clone().unwrap_or(config.storage.dsn);

    commands::prepare_target(kind, &dsn)?;
    let backend = SqlBackend::connect(kind, &dsn).await?;

    let result = commands::dispatch(cli.command, &backend).await;
    backend.close().await;
    result
}
