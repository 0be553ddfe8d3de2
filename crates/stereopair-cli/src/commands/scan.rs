//! Source directory scanning and pair enumeration.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension matched by [`list_wav_files`]. The match is case-sensitive.
pub const WAV_EXTENSION: &str = "wav";

/// Lists the `.wav` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into, and names such as `take.WAV` do
/// not match. Sorting makes pair order and output names independent of the
/// platform's directory enumeration order.
///
/// Only a failure to read `dir` itself is an error. A `.wav` entry that
/// cannot be inspected (a dangling symlink, say) is still listed so that
/// decoding reports it against its pairs; other unreadable entries are
/// skipped with a warning.
pub fn list_wav_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Source path is not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_wav(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) if err.depth() == 0 => {
                return Err(err)
                    .with_context(|| format!("Failed to read directory {}", dir.display()));
            }
            Err(err) => match err.path() {
                Some(path) if is_wav(path) => {
                    tracing::warn!(path = %path.display(), "cannot inspect entry: {}", err);
                    files.push(path.to_path_buf());
                }
                _ => tracing::warn!("skipping unreadable entry: {}", err),
            },
        }
    }

    // Sort for deterministic output
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == WAV_EXTENSION)
        .unwrap_or(false)
}

/// Every unordered pair `(files[i], files[j])` with `i < j`.
///
/// The earlier file of each pair is the left channel.
pub fn unordered_pairs(files: &[PathBuf]) -> Vec<(&Path, &Path)> {
    let mut pairs = Vec::with_capacity(files.len() * files.len().saturating_sub(1) / 2);
    for (i, left) in files.iter().enumerate() {
        for right in &files[i + 1..] {
            pairs.push((left.as_path(), right.as_path()));
        }
    }
    pairs
}
