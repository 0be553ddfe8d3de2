//! Header fields of the `fmt ` chunk.

use crate::buffer::AudioBuffer;

/// Parameters written to the `fmt ` chunk of an integer PCM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Interleaved channel count.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// Sample width in bits, 8 to 32 in steps of 8.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Header parameters for writing `buffer`.
    pub fn of(buffer: &AudioBuffer) -> Self {
        let format = buffer.format();
        Self {
            channels: buffer.channels(),
            sample_rate: format.frame_rate,
            bits_per_sample: format.bits_per_sample(),
        }
    }

    /// Width of one channel's sample in bytes.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Width of one frame (all channels) in bytes, or `None` if it does not
    /// fit the header's 16-bit field.
    pub fn block_align(&self) -> Option<u16> {
        self.channels.checked_mul(self.bytes_per_sample())
    }

    /// Bytes per second, or `None` if it does not fit the header's 32-bit
    /// field.
    ///
    /// A stereo output has twice the byte rate of its mono inputs, so a
    /// readable input can still produce an unrepresentable output.
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(u32::from(self.block_align()?))
    }
}
