//! One pair from input files to merged output file.

use std::path::{Path, PathBuf};

use crate::buffer::SampleFormat;
use crate::decode::decode;
use crate::error::PairError;
use crate::merge::merge;
use crate::wav;

/// Suffix appended to every merged output name.
pub const MERGED_SUFFIX: &str = "_merged.wav";

/// A successfully merged pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    /// Path of the written stereo file.
    pub output: PathBuf,
    /// Frames in the output (the longer input's length).
    pub frames: usize,
    /// Shared sample width and frame rate.
    pub format: SampleFormat,
    /// Frames in the left input before padding.
    pub left_frames: usize,
    /// Frames in the right input before padding.
    pub right_frames: usize,
}

/// Output file name for a pair: `{left_stem}_{right_stem}_merged.wav`.
pub fn output_file_name(left: &Path, right: &Path) -> String {
    format!("{}_{}{}", stem(left), stem(right), MERGED_SUFFIX)
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decodes both inputs, merges them and writes the result into `out_dir`.
///
/// `left` supplies the left channel and `right` the right channel. Steps run
/// in order (decode left, decode right, merge, write) and the first failure is
/// returned. `out_dir` is created if it does not exist. Nothing is written
/// unless the merge succeeds.
pub fn merge_pair(left: &Path, right: &Path, out_dir: &Path) -> Result<PairOutcome, PairError> {
    let left_buf = decode(left)?;
    let right_buf = decode(right)?;

    let merged = merge(&left_buf, &right_buf)?;

    wav::ensure_dir(out_dir)?;
    let output = out_dir.join(output_file_name(left, right));
    wav::write(&output, &merged)?;

    Ok(PairOutcome {
        output,
        frames: merged.frames(),
        format: merged.format(),
        left_frames: left_buf.frames(),
        right_frames: right_buf.frames(),
    })
}
