use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `pantry` binary.
#[derive(Debug, Parser)]
#[command(name = "pantry", version, about = "Pantry - recipe sharing backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),

    /// Print the meal tag the time-based feed would use
    Tag {
        /// Hour of day (0-23); defaults to the current local hour
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
}

/// Overrides applied on top of the loaded configuration.
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file path (":memory:" for a throwaway database)
    #[arg(long)]
    pub db: Option<String>,
}
