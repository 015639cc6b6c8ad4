//! CLI presentation: text formatters per command family.

use crate::mutate::MutationReport;
use crate::snapshot::SnapshotSummary;
use crate::tree::builder::BuildReport;
use crate::units::format_bytes;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::fmt::Write;
use std::path::Path;

/// Estimate output: minimum, simulated and maximum totals, one per line.
pub fn format_estimate(report: &BuildReport) -> String {
    let budget = &report.budget;
    format!(
        "Minimum:   {} ({} files)\nSimulated: {} ({} files)\nMaximum:   {} ({} files)",
        format_bytes(budget.min_size),
        budget.total_dirs,
        format_bytes(report.total_size),
        report.file_count,
        format_bytes(budget.max_size),
        budget.max_file_count,
    )
}

pub fn format_build_summary(report: &BuildReport) -> String {
    let mut out = format!(
        "Built {} files in {} directories across {} levels: {}",
        report.file_count,
        report.directory_count,
        report.levels,
        format_bytes(report.total_size)
    );
    if report.existing_files > 0 || report.existing_directories > 0 {
        let _ = write!(
            out,
            "\nKept {} existing files and {} existing directories",
            report.existing_files, report.existing_directories
        );
    }
    if report.skipped_slots > 0 {
        let _ = write!(
            out,
            "\n{} file slots skipped at the size limit",
            report.skipped_slots
        );
    }
    out
}

pub fn format_scan_summary(summary: &SnapshotSummary, saved_to: Option<&Path>) -> String {
    let mut out = format!(
        "Scanned {} directories and {} files ({})",
        summary.directories,
        summary.files,
        format_bytes(summary.file_bytes)
    );
    if let Some(path) = saved_to {
        let _ = write!(out, "\nSnapshot written to {}", path.display());
    }
    out
}

pub fn format_scan_table(summary: &SnapshotSummary) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Type", "Count", "Size"]);
    table.add_row(vec![
        "Directories".to_string(),
        summary.directories.to_string(),
        format_bytes(summary.directory_bytes),
    ]);
    table.add_row(vec![
        "Files".to_string(),
        summary.files.to_string(),
        format_bytes(summary.file_bytes),
    ]);
    table.to_string()
}

pub fn format_mutation_report(report: &MutationReport) -> String {
    let mut out = format!(
        "Selected {} of {} files: {} rewritten ({}), {} backdated, {} unchanged",
        report.selected.len(),
        report.candidates,
        report.rewritten,
        format_bytes(report.bytes_written),
        report.backdated,
        report.unchanged
    );
    if !report.failures.is_empty() {
        let _ = write!(out, "\n{} failures:", report.failures.len());
        for failure in &report.failures {
            let _ = write!(out, "\n  {}: {}", failure.path.display(), failure.error);
        }
    }
    out
}
