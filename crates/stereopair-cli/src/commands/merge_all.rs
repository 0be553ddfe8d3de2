//! Batch merge command
//!
//! Merges every unordered pair of WAV files in a source directory into a
//! stereo file in the target directory. A failing pair is reported and
//! skipped; it never stops the batch.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use stereopair_audio::merge_pair;

use super::report::{print_pair, print_summary, BatchReport, PairReport};
use super::scan::{list_wav_files, unordered_pairs};

/// Run the batch merge.
///
/// # Arguments
/// * `source_dir` - Directory containing the input `.wav` files
/// * `target_dir` - Directory for merged outputs (created if absent)
/// * `json_output` - Print a JSON batch report instead of colored text
/// * `report_path` - Optional file to also write the JSON batch report to
///
/// # Returns
/// `ExitCode::SUCCESS` once every pair has been attempted, even if some were
/// skipped. Errors only when the run cannot start or the report file cannot
/// be written.
pub fn run(
    source_dir: &Path,
    target_dir: &Path,
    json_output: bool,
    report_path: Option<&Path>,
) -> Result<ExitCode> {
    if !json_output {
        println!("{} {}", "Source:".dimmed(), source_dir.display());
        println!("{} {}", "Target:".dimmed(), target_dir.display());
    }

    let report = merge_all(source_dir, target_dir, |index, total, result| {
        if !json_output {
            print_pair(index, total, result);
        }
    })?;

    let report_json = serde_json::to_string_pretty(&report)?;
    if json_output {
        println!("{}", report_json);
    } else {
        print_summary(&report);
    }

    if let Some(path) = report_path {
        fs::write(path, &report_json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if !json_output {
            println!("Report: {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Merges all pairs and returns the batch report.
///
/// `on_pair` is called after each pair with its zero-based index, the total
/// number of pairs and the pair's result.
///
/// # Errors
/// Fails only if `source_dir` cannot be listed. Per-pair failures are recorded
/// in the report.
pub fn merge_all<F>(source_dir: &Path, target_dir: &Path, mut on_pair: F) -> Result<BatchReport>
where
    F: FnMut(usize, usize, &PairReport),
{
    let files = list_wav_files(source_dir)?;
    let pairs = unordered_pairs(&files);
    tracing::info!(
        files = files.len(),
        pairs = pairs.len(),
        source = %source_dir.display(),
        "starting batch merge"
    );

    let mut report = BatchReport::new(source_dir, target_dir, files.len());
    if pairs.is_empty() && !files.is_empty() {
        tracing::warn!("only one WAV file found, nothing to pair");
    }

    for (index, (left, right)) in pairs.iter().enumerate() {
        let result = match merge_pair(left, right, target_dir) {
            Ok(outcome) => {
                tracing::debug!(
                    output = %outcome.output.display(),
                    left_frames = outcome.left_frames,
                    right_frames = outcome.right_frames,
                    "pair merged"
                );
                PairReport::merged(left, right, &outcome)
            }
            Err(err) => {
                tracing::debug!(
                    left = %left.display(),
                    right = %right.display(),
                    reason = err.code(),
                    "pair skipped: {}",
                    err
                );
                PairReport::skipped(left, right, &err)
            }
        };
        on_pair(index, pairs.len(), &result);
        report.push(result);
    }

    Ok(report)
}
