//! In-memory PCM sample buffers.

use std::fmt;

/// Sample width and frame rate of a PCM stream.
///
/// Two buffers can be merged only when their formats are exactly equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleFormat {
    /// Bytes per sample (per channel).
    pub sample_width_bytes: u16,
    /// Frames per second in Hz.
    pub frame_rate: u32,
}

impl SampleFormat {
    /// Creates a sample format.
    pub fn new(sample_width_bytes: u16, frame_rate: u32) -> Self {
        Self {
            sample_width_bytes,
            frame_rate,
        }
    }

    /// Bits per sample as written in a WAV header.
    pub fn bits_per_sample(&self) -> u16 {
        self.sample_width_bytes * 8
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit @ {} Hz", self.bits_per_sample(), self.frame_rate)
    }
}

/// Signed integer PCM samples plus the metadata needed to write them back.
///
/// Samples are interleaved when `channels > 1`. Every value lies in the signed
/// range of the format's sample width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i32>,
    channels: u16,
    format: SampleFormat,
}

impl AudioBuffer {
    /// Creates a single-channel buffer.
    pub fn mono(samples: Vec<i32>, format: SampleFormat) -> Self {
        Self {
            samples,
            channels: 1,
            format,
        }
    }

    /// Creates a buffer from interleaved samples.
    ///
    /// Returns `None` if `channels` is zero or the sample count is not a whole
    /// number of frames.
    pub fn interleaved(samples: Vec<i32>, channels: u16, format: SampleFormat) -> Option<Self> {
        if channels == 0 || samples.len() % channels as usize != 0 {
            return None;
        }
        Some(Self {
            samples,
            channels,
            format,
        })
    }

    /// Wraps already interleaved `[l0, r0, l1, r1, ...]` samples.
    pub(crate) fn stereo(samples: Vec<i32>, format: SampleFormat) -> Self {
        debug_assert!(samples.len() % 2 == 0, "stereo data must hold whole frames");
        Self {
            samples,
            channels: 2,
            format,
        }
    }

    /// All samples, interleaved.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Number of channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample width and frame rate.
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Copies one channel out of the interleaved data.
    ///
    /// Returns an empty vector for an out-of-range channel index.
    pub fn channel(&self, index: u16) -> Vec<i32> {
        if index >= self.channels {
            return Vec::new();
        }
        self.samples
            .iter()
            .skip(index as usize)
            .step_by(self.channels as usize)
            .copied()
            .collect()
    }

    /// Consumes the buffer and returns the raw samples.
    pub fn into_samples(self) -> Vec<i32> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_format_equality_is_exact() {
        assert_eq!(SampleFormat::new(2, 44100), SampleFormat::new(2, 44100));
        assert_ne!(SampleFormat::new(2, 44100), SampleFormat::new(2, 44101));
        assert_ne!(SampleFormat::new(2, 44100), SampleFormat::new(3, 44100));
    }

    #[test]
    fn test_sample_format_display() {
        assert_eq!(SampleFormat::new(3, 48000).to_string(), "24-bit @ 48000 Hz");
    }

    #[test]
    fn test_interleaved_rejects_partial_frames() {
        let format = SampleFormat::new(2, 8000);
        assert!(AudioBuffer::interleaved(vec![1, 2, 3], 2, format).is_none());
        assert!(AudioBuffer::interleaved(vec![1, 2], 0, format).is_none());
        assert!(AudioBuffer::interleaved(vec![1, 2, 3, 4], 2, format).is_some());
    }

    #[test]
    fn test_stereo_splits_into_channels() {
        let buffer = AudioBuffer::stereo(vec![1, -1, 2, -2], SampleFormat::new(1, 8000));
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.frames(), 2);
        assert_eq!(buffer.channel(0), vec![1, 2]);
        assert_eq!(buffer.channel(1), vec![-1, -2]);
    }

    #[test]
    fn test_channel_deinterleaves() {
        let format = SampleFormat::new(2, 8000);
        let buffer = AudioBuffer::interleaved(vec![1, -1, 2, -2, 3, -3], 2, format).unwrap();
        assert_eq!(buffer.frames(), 3);
        assert_eq!(buffer.channel(0), vec![1, 2, 3]);
        assert_eq!(buffer.channel(1), vec![-1, -2, -3]);
        assert!(buffer.channel(2).is_empty());
    }
}
