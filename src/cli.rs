//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; the route table dispatches to the library services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{BuildArgs, Cli, Commands};
pub use presentation::{
    format_build_summary, format_estimate, format_mutation_report, format_scan_summary,
    format_scan_table,
};
pub use route::RunContext;
