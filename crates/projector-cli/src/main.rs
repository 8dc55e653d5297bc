mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "projector", about = "Magnifying-glass image inspector")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the letterbox/pillarbox padding of an image in a container
    Padding(commands::padding::PaddingArgs),
    /// Compute the active area, mask and projector transform for one pointer position
    Lens(commands::lens::LensArgs),
    /// Replay a scripted event trace through the inspector
    Replay(commands::replay::ReplayArgs),
    /// Show the natural size of an image file
    Info(commands::info::InfoArgs),
    /// Print or save the default inspector config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Padding(args) => commands::padding::run(args),
        Commands::Lens(args) => commands::lens::run(args),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
