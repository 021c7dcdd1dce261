use crate::cleaner::{CleanOutcome, CleanReport};
use crate::model::ScanResult;
use humansize::{BINARY, format_size};
use std::fmt::Write as _;

pub fn status_label(result: &ScanResult) -> String {
    let tags = result.tags();
    if tags.is_empty() {
        "ready".to_string()
    } else {
        tags.join(" ")
    }
}

/// Plain-text table of scan results followed by the grand total.
pub fn render_table(results: &[ScanResult]) -> String {
    let mut out = format!("{:<40} {:>12}  {}\n", "Category", "Size", "Status");
    let _ = writeln!(out, "{}", "-".repeat(66));

    for r in results {
        let _ = writeln!(
            out,
            "{:<40} {:>12}  {}",
            r.name,
            format_size(r.total_size, BINARY),
            status_label(r)
        );
    }

    let total: u64 = results.iter().map(|r| r.total_size).sum();
    let _ = writeln!(out, "{}", "-".repeat(66));
    let _ = write!(out, "Total Cache Size: {}", format_size(total, BINARY));
    out
}

pub fn outcome_line(result: &ScanResult, outcome: &CleanOutcome) -> String {
    match outcome {
        CleanOutcome::Succeeded { .. } if result.command.is_some() => {
            format!("✓ {} - command executed", result.name)
        }
        CleanOutcome::Succeeded { freed } => {
            format!("✓ {} - {} cleaned", result.name, format_size(*freed, BINARY))
        }
        CleanOutcome::Failed(err) => format!("✗ {} - {err}", result.name),
        CleanOutcome::NothingToDo => format!("  {} - no files to clean", result.name),
    }
}

pub fn render_summary(report: &CleanReport) -> String {
    let mut out = format!("Cleaning Complete!\n✓ Success: {}\n", report.succeeded);
    if report.failed > 0 {
        let _ = writeln!(out, "✗ Failed: {}", report.failed);
    }
    if report.skipped > 0 {
        let _ = writeln!(out, "  Nothing to do: {}", report.skipped);
    }
    let _ = write!(out, "Total cleaned: {}", format_size(report.bytes_freed, BINARY));
    out
}
