//! CLI parse: clap types for synthfs. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// synthfs - synthetic filesystem datasets for backup and sync testing
#[derive(Parser)]
#[command(name = "synthfs", version)]
#[command(about = "Generate synthetic filesystem datasets and simulate churn on them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging and console progress
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Seed for all random draws (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build (or estimate) a synthetic dataset
    Build(BuildArgs),
    /// Scan a tree into a snapshot
    Scan {
        /// Root directory to scan
        #[arg(long)]
        root: PathBuf,
        /// Write the snapshot as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print directory and file counts and sizes as a table
        #[arg(long)]
        pretty: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Mutate a share of the files in an existing dataset
    Mutate {
        /// Root directory of the dataset
        #[arg(long)]
        root: PathBuf,
        /// Percentage of files to select (1-100)
        #[arg(long)]
        perc_files: u32,
        /// Percentage of each selected file's size to rewrite (0-150)
        #[arg(long, default_value = "0")]
        perc_data: u32,
        /// Backdate selected files to this date (YYYY-MM-DD) instead of rewriting
        #[arg(long)]
        backdate: Option<String>,
        /// Use a saved snapshot instead of scanning the root
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Destination root directory
    #[arg(long)]
    pub root: PathBuf,

    /// JSON spec file (foldersWidth, foldersDepth, maxFilesPerDir, minFileSize, maxFileSize)
    #[arg(long)]
    pub spec: Option<PathBuf>,

    /// Size gauge replacing min/max file size (empty, tiny, small, medium, large, huge)
    #[arg(long)]
    pub gauge: Option<String>,

    /// Width directories per depth level
    #[arg(long)]
    pub width: Option<u32>,

    /// Nominal number of depth levels
    #[arg(long)]
    pub depth: Option<u32>,

    /// Maximum files per directory (1-9999)
    #[arg(long)]
    pub max_files: Option<u32>,

    /// Minimum file size (e.g. 4096, 10KB)
    #[arg(long)]
    pub min_size: Option<String>,

    /// Maximum file size (e.g. 10MB)
    #[arg(long)]
    pub max_size: Option<String>,

    /// Compute sizes without writing anything
    #[arg(long)]
    pub estimate: bool,

    /// Add depth levels until the maximum size is reached
    #[arg(long)]
    pub fill: bool,

    /// Lower bound for random file timestamps (YYYY-MM-DD)
    #[arg(long, requires = "max_date")]
    pub min_date: Option<String>,

    /// Upper bound for random file timestamps (YYYY-MM-DD)
    #[arg(long, requires = "min_date")]
    pub max_date: Option<String>,
}
