//! Command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log records (e.g. "build", "scan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Build(args) if args.estimate => "build.estimate",
        Commands::Build(_) => "build",
        Commands::Scan { .. } => "scan",
        Commands::Mutate { .. } => "mutate",
        Commands::Config => "config",
    }
}
