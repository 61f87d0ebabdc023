use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use iconhound::app::AppContext;
use iconhound::cli::{commands, Cli, Commands};
use iconhound::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(workers) = cli.workers {
        config.enrich.workers = workers;
    }

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Resolve { request, json } => {
            commands::resolve(&ctx, &request, json).await?;
        }
        Commands::Icons { request } => {
            commands::list_icons(&ctx, &request).await?;
        }
    }

    Ok(())
}
