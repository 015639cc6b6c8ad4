//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SynthError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &SynthError) -> String {
    match e {
        SynthError::InvalidSpec(_) => format!("{}\nSee `synthfs build --help` for spec fields.", e),
        _ => e.to_string(),
    }
}
