//! WAV decoding and channel downmixing.
//!
//! Every supported width (1 to 4 bytes) goes through the same path: hound
//! yields each sample as an `i32` in the width's signed range, and the
//! downmix works on those values without knowing the width.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::buffer::{AudioBuffer, SampleFormat};
use crate::error::{DecodeError, DecodeErrorKind};

/// Widest sample, in bytes, that fits an `i32` without loss.
pub const MAX_SAMPLE_WIDTH_BYTES: u16 = 4;

/// Reads a PCM WAV file and returns it as a mono buffer.
///
/// Multi-channel files are downmixed with [`downmix`]. Mono files are returned
/// unchanged.
///
/// # Errors
/// Returns a [`DecodeError`] carrying `path` if the file cannot be opened, is
/// not a well-formed WAV file, is not integer PCM, or uses a sample width that
/// is not a whole number of bytes between 1 and 4.
pub fn decode(path: &Path) -> Result<AudioBuffer, DecodeError> {
    let (samples, channels, format) =
        read_interleaved(path).map_err(|kind| DecodeError::new(path, kind))?;

    tracing::debug!(
        path = %path.display(),
        channels,
        bits = format.bits_per_sample(),
        rate = format.frame_rate,
        frames = samples.len() / channels as usize,
        "decoded WAV file"
    );

    if channels == 1 {
        return Ok(AudioBuffer::mono(samples, format));
    }
    Ok(AudioBuffer::mono(downmix(&samples, channels), format))
}

/// Averages interleaved multi-channel samples down to one channel.
///
/// Each output sample is the floor of the mean of one frame:
/// `floor((v1 + ... + vN) / N)`. Floor division rounds toward negative
/// infinity, so the frame `[-3, 0]` becomes `-2`, not `-1`. The mean of
/// values in a signed range stays in that range, so the width is preserved.
///
/// A trailing partial frame is ignored; [`decode`] rejects such files before
/// calling this.
pub fn downmix(samples: &[i32], channels: u16) -> Vec<i32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let divisor = i64::from(channels);
    samples
        .chunks_exact(channels as usize)
        .map(|frame| {
            let sum: i64 = frame.iter().map(|&s| i64::from(s)).sum();
            // |mean| <= max |sample|, so the narrowing cannot overflow.
            sum.div_euclid(divisor) as i32
        })
        .collect()
}

fn read_interleaved(path: &Path) -> Result<(Vec<i32>, u16, SampleFormat), DecodeErrorKind> {
    let file = File::open(path).map_err(DecodeErrorKind::Open)?;
    let mut reader = hound::WavReader::new(BufReader::new(file))?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(DecodeErrorKind::UnsupportedEncoding {
            message: format!("{:?} samples, only integer PCM is supported", spec.sample_format),
        });
    }

    let bits = spec.bits_per_sample;
    if bits == 0 || bits % 8 != 0 || bits / 8 > MAX_SAMPLE_WIDTH_BYTES {
        return Err(DecodeErrorKind::UnsupportedWidth { bits });
    }

    if spec.channels == 0 {
        return Err(DecodeErrorKind::malformed("header declares zero channels"));
    }

    let samples = reader
        .samples::<i32>()
        .collect::<Result<Vec<i32>, _>>()?;

    if samples.len() % spec.channels as usize != 0 {
        return Err(DecodeErrorKind::malformed(format!(
            "{} samples do not divide into {}-channel frames",
            samples.len(),
            spec.channels
        )));
    }

    Ok((
        samples,
        spec.channels,
        SampleFormat::new(bits / 8, spec.sample_rate),
    ))
}
