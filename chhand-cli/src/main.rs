//! Command-line entry point for the chhand Doha meter checker

use chhand_cli::commands::Commands;
use clap::Parser;

/// Doha meter checker for Devanagari and Urdu verse
#[derive(Debug, Parser)]
#[command(name = "chhand", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Count(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
