//! Batch report types and console rendering.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::Path;

use stereopair_audio::{PairError, PairOutcome};

/// Result of a whole batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchReport {
    /// Directory the inputs were read from.
    pub source_dir: String,
    /// Directory outputs were written to.
    pub target_dir: String,
    /// Number of `.wav` files found.
    pub files: usize,
    /// Number of pairs attempted.
    pub total: usize,
    /// Pairs that produced an output file.
    pub merged: usize,
    /// Pairs that were skipped.
    pub skipped: usize,
    /// Per-pair results, in processing order.
    pub results: Vec<PairReport>,
}

impl BatchReport {
    /// Creates an empty report for a run.
    pub fn new(source_dir: &Path, target_dir: &Path, files: usize) -> Self {
        Self {
            source_dir: source_dir.display().to_string(),
            target_dir: target_dir.display().to_string(),
            files,
            total: 0,
            merged: 0,
            skipped: 0,
            results: Vec::new(),
        }
    }

    /// Records one pair result.
    pub fn push(&mut self, result: PairReport) {
        self.total += 1;
        match result.status {
            PairStatus::Merged => self.merged += 1,
            PairStatus::Skipped => self.skipped += 1,
        }
        self.results.push(result);
    }
}

/// Whether a pair produced output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PairStatus {
    /// Output file written.
    Merged,
    /// Pair skipped; see `error`.
    Skipped,
}

/// Result of one pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairReport {
    /// Left-channel input.
    pub left: String,
    /// Right-channel input.
    pub right: String,
    /// Outcome.
    pub status: PairStatus,
    /// Written file (merged pairs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Output frame count (merged pairs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<usize>,
    /// Output sample rate in Hz (merged pairs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    /// Output bits per sample (merged pairs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits_per_sample: Option<u16>,
    /// Why the pair was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PairReportError>,
}

/// Skip reason in a [`PairReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairReportError {
    /// Stable reason code (`decode_error`, `incompatible_formats`, `not_mono`,
    /// `io_error` or `unwritable_format`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl PairReport {
    /// Report for a pair that was written.
    pub fn merged(left: &Path, right: &Path, outcome: &PairOutcome) -> Self {
        Self {
            left: left.display().to_string(),
            right: right.display().to_string(),
            status: PairStatus::Merged,
            output: Some(outcome.output.display().to_string()),
            frames: Some(outcome.frames),
            sample_rate: Some(outcome.format.frame_rate),
            bits_per_sample: Some(outcome.format.bits_per_sample()),
            error: None,
        }
    }

    /// Report for a pair that was skipped.
    pub fn skipped(left: &Path, right: &Path, error: &PairError) -> Self {
        Self {
            left: left.display().to_string(),
            right: right.display().to_string(),
            status: PairStatus::Skipped,
            output: None,
            frames: None,
            sample_rate: None,
            bits_per_sample: None,
            error: Some(PairReportError {
                code: error.code().to_string(),
                message: error.to_string(),
            }),
        }
    }
}

/// Prints one pair result line.
pub fn print_pair(index: usize, total: usize, report: &PairReport) {
    let progress = format!("[{}/{}]", index + 1, total).cyan().bold();
    let left = file_name(&report.left);
    let right = file_name(&report.right);

    match (&report.status, &report.error) {
        (PairStatus::Merged, _) => {
            let detail = format!(
                "{} frames, {}-bit @ {} Hz",
                report.frames.unwrap_or(0),
                report.bits_per_sample.unwrap_or(0),
                report.sample_rate.unwrap_or(0)
            );
            println!(
                "{} {} {} + {} {} {} {}",
                progress,
                "✓".green().bold(),
                left,
                right,
                "→".dimmed(),
                file_name(report.output.as_deref().unwrap_or_default()),
                detail.dimmed()
            );
        }
        (PairStatus::Skipped, error) => {
            let message = error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or("unknown error");
            println!(
                "{} {} {} + {} {} {}",
                progress,
                "✗ SKIP".red().bold(),
                left,
                right,
                "•".dimmed(),
                message
            );
        }
    }
}

/// Prints the end-of-run summary.
pub fn print_summary(report: &BatchReport) {
    println!("\n{}", "=".repeat(60));
    println!(
        "{} {} {}",
        "Merge Summary".bold(),
        "•".dimmed(),
        format!("{} files, {} pairs", report.files, report.total).dimmed()
    );
    println!(
        "  Merged:  {}",
        if report.merged > 0 {
            report.merged.to_string().green()
        } else {
            report.merged.to_string().normal()
        }
    );
    println!(
        "  Skipped: {}",
        if report.skipped > 0 {
            report.skipped.to_string().yellow()
        } else {
            report.skipped.to_string().normal()
        }
    );
    println!("Output directory: {}", report.target_dir);
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
