//! PCM sample encoding.

use crate::decode::MAX_SAMPLE_WIDTH_BYTES;
use crate::error::WriteError;

/// Converts signed samples to little-endian PCM bytes of `width` bytes each.
///
/// One routine covers every width: the value is range-checked against the
/// width's signed range and its low `width` bytes are emitted. 8-bit PCM is
/// unsigned on disk, so 1-byte samples are stored offset by +128.
///
/// # Errors
/// - [`WriteError::UnsupportedWidth`] if `width` is not between 1 and 4.
/// - [`WriteError::SampleOutOfRange`] if a sample does not fit `width` bytes.
pub fn encode_samples(samples: &[i32], width: u16) -> Result<Vec<u8>, WriteError> {
    if width == 0 || width > MAX_SAMPLE_WIDTH_BYTES {
        return Err(WriteError::UnsupportedWidth { width });
    }

    let bits = u32::from(width) * 8;
    let min = -(1i64 << (bits - 1));
    let max = (1i64 << (bits - 1)) - 1;
    let width = width as usize;

    let mut pcm = Vec::with_capacity(samples.len() * width);
    for &sample in samples {
        let value = i64::from(sample);
        if value < min || value > max {
            return Err(WriteError::SampleOutOfRange {
                value: sample,
                width: width as u16,
            });
        }

        if width == 1 {
            pcm.push((value + 128) as u8);
        } else {
            pcm.extend_from_slice(&sample.to_le_bytes()[..width]);
        }
    }

    Ok(pcm)
}
