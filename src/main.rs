mod cli;
mod config;
mod duration;
mod error;
mod playlist;
mod render;
mod report;
mod state;
mod youtube;

use clap::Parser;
use cli::Cli;
use config::Config;
use error::AppError;
use state::ApiContext;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // stdout carries the rendered listing, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::resolve(cli.api_key, cli.api_base)?;
    let api = ApiContext::new(&config);

    let output = report::build_report(
        &api,
        &cli.playlist,
        cli.format,
        cli.include_total_duration,
    )
    .await?;

    print!("{}", output);
    Ok(())
}
