//! Length alignment and stereo interleaving of two mono buffers.

use crate::buffer::AudioBuffer;
use crate::error::MergeError;

/// Combines two mono buffers into one stereo buffer.
///
/// The first argument becomes the left channel and the second the right
/// channel, so `merge(a, b)` and `merge(b, a)` differ whenever `a != b`. The
/// shorter input is padded with trailing silence (zero) up to the longer
/// input's length; nothing is ever truncated. Sample values pass through
/// unchanged.
///
/// # Errors
/// - [`MergeError::NotMono`] if either input has more than one channel.
/// - [`MergeError::IncompatibleFormats`] if the sample widths or frame rates
///   differ. No samples are touched in that case.
pub fn merge(left: &AudioBuffer, right: &AudioBuffer) -> Result<AudioBuffer, MergeError> {
    for input in [left, right] {
        if input.channels() != 1 {
            return Err(MergeError::NotMono {
                channels: input.channels(),
            });
        }
    }

    if left.format() != right.format() {
        return Err(MergeError::IncompatibleFormats {
            left: left.format(),
            right: right.format(),
        });
    }

    let frames = left.frames().max(right.frames());
    let left_padded = pad_to_length(left.samples(), frames);
    let right_padded = pad_to_length(right.samples(), frames);
    let stereo = interleave(&left_padded, &right_padded);

    Ok(AudioBuffer::stereo(stereo, left.format()))
}

/// Extends `samples` with trailing zeros up to `len`.
///
/// Inputs already at least `len` long are returned unchanged.
pub fn pad_to_length(samples: &[i32], len: usize) -> Vec<i32> {
    let mut padded = Vec::with_capacity(len.max(samples.len()));
    padded.extend_from_slice(samples);
    if padded.len() < len {
        padded.resize(len, 0);
    }
    padded
}

/// Interleaves two channels as `[l0, r0, l1, r1, ...]`.
///
/// Stops at the end of the shorter channel; callers pad first.
pub fn interleave(left: &[i32], right: &[i32]) -> Vec<i32> {
    let len = left.len().min(right.len());
    let mut out = Vec::with_capacity(len * 2);

    for (&l, &r) in left.iter().zip(right.iter()) {
        out.push(l);
        out.push(r);
    }

    out
}
