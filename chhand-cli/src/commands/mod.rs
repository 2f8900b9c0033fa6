//! CLI command implementations

use clap::Subcommand;

pub mod check;
pub mod count;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a verse against the Doha meter
    Check(check::CheckArgs),

    /// Count matras without validating the meter
    Count(count::CountArgs),
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
