//! Integration tests for synthfs dataset building, scanning and mutation

mod build_dataset;
mod cli_commands;
mod config_integration;
mod scan_snapshot;
mod test_utils;
