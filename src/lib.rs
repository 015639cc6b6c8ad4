//! synthfs: Synthetic Filesystem Datasets
//!
//! Builds deterministic-shaped trees of random files for exercising backup,
//! sync and deduplication tools, scans existing trees into snapshots, and
//! simulates churn by rewriting or backdating a share of their files.

pub mod cli;
pub mod config;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod mutate;
pub mod progress;
pub mod snapshot;
pub mod spec;
pub mod tree;
pub mod units;
