use clap::Parser;
use clipper::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipper=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, name }) => {
            clipper::cli::init::run(path, name)?;
        }
        Some(Commands::Serve { host, port }) => {
            clipper::cli::serve::run(&cli.config, &host, port).await?;
        }
        Some(Commands::Migrate) => {
            clipper::cli::migrate::run(&cli.config)?;
        }
        Some(Commands::Seed { route, dir }) => {
            clipper::cli::seed::run(&cli.config, &route, dir)?;
        }
        Some(Commands::Sync) => {
            clipper::cli::sync::run(&cli.config)?;
        }
        Some(Commands::Ingest { source, tag }) => {
            clipper::cli::ingest::run(&cli.config, &source, tag)?;
        }
        Some(Commands::Cleanup) => {
            clipper::cli::cleanup::run(&cli.config)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
