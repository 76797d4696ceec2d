use anyhow::Context;
use chrono::Timelike;
use clap::Parser;
use pantry_config::PantryConfig;
use pantry_core::meal::MealTag;

mod cli;

use cli::{Cli, Commands, ServeArgs};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pantry error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::Serve(args) => {
            let config = load_config(args)?;
            pantry_server::server::serve(&config).await
        }
        Commands::Tag { hour } => {
            let hour = hour.unwrap_or_else(|| chrono::Local::now().hour());
            let tag = MealTag::for_hour(hour);
            println!("{tag}\t{}", tag.feed_tag());
            Ok(())
        }
    }
}

fn load_config(args: ServeArgs) -> anyhow::Result<PantryConfig> {
    let mut config = PantryConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(db) = args.db {
        config.database.path = db;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PANTRY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
