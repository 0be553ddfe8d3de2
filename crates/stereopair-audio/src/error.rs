//! Error types for the audio core.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::SampleFormat;

/// A WAV file could not be decoded into an [`AudioBuffer`](crate::AudioBuffer).
#[derive(Debug, Error)]
#[error("cannot decode '{}': {kind}", path.display())]
pub struct DecodeError {
    /// The file that failed to decode.
    pub path: PathBuf,
    /// What went wrong.
    #[source]
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub(crate) fn new(path: &Path, kind: DecodeErrorKind) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
        }
    }
}

/// Reason a decode failed.
#[derive(Debug, Error)]
pub enum DecodeErrorKind {
    /// The file could not be opened.
    #[error("cannot open file: {0}")]
    Open(#[source] io::Error),

    /// The RIFF/WAVE structure or the sample data is corrupt.
    #[error("malformed WAV data: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },

    /// The file is a WAV file, but not integer PCM.
    #[error("unsupported encoding: {message}")]
    UnsupportedEncoding {
        /// Error message.
        message: String,
    },

    /// Sample width is not a whole number of bytes between 1 and 4.
    #[error("unsupported sample width: {bits} bits per sample")]
    UnsupportedWidth {
        /// Bits per sample declared in the header.
        bits: u16,
    },
}

impl DecodeErrorKind {
    /// Creates a malformed data error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

impl From<hound::Error> for DecodeErrorKind {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => Self::malformed(format!("read failed: {}", e)),
            hound::Error::Unsupported => Self::UnsupportedEncoding {
                message: "not an integer PCM stream".to_string(),
            },
            hound::Error::InvalidSampleFormat => Self::UnsupportedEncoding {
                message: "sample format does not match integer PCM".to_string(),
            },
            other => Self::malformed(other.to_string()),
        }
    }
}

/// Two decoded buffers cannot be merged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// Sample width or frame rate differ between the inputs.
    #[error("incompatible formats: left is {left}, right is {right}")]
    IncompatibleFormats {
        /// Format of the left input.
        left: SampleFormat,
        /// Format of the right input.
        right: SampleFormat,
    },

    /// An input still has more than one channel.
    #[error("merge input must be mono, found {channels} channels")]
    NotMono {
        /// Channel count of the offending input.
        channels: u16,
    },
}

/// A buffer could not be serialized to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// I/O failure while creating the directory, writing, or renaming the file.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A sample does not fit the declared sample width.
    #[error("sample value {value} does not fit in {width} byte(s)")]
    SampleOutOfRange {
        /// Offending sample.
        value: i32,
        /// Sample width in bytes.
        width: u16,
    },

    /// PCM data is larger than a RIFF header can describe.
    #[error("PCM data of {bytes} bytes exceeds the 4 GiB WAV limit")]
    DataTooLarge {
        /// Size of the encoded PCM data.
        bytes: usize,
    },

    /// Block align or byte rate does not fit the `fmt ` chunk.
    #[error(
        "{channels} channel(s) of {bits_per_sample}-bit @ {sample_rate} Hz overflow the WAV header"
    )]
    HeaderOverflow {
        /// Channel count.
        channels: u16,
        /// Frames per second.
        sample_rate: u32,
        /// Bits per sample.
        bits_per_sample: u16,
    },

    /// Sample width cannot be written.
    #[error("unsupported sample width: {width} byte(s)")]
    UnsupportedWidth {
        /// Sample width in bytes.
        width: u16,
    },
}

impl WriteError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A single pair could not be merged; the driver skips it.
#[derive(Debug, Error)]
pub enum PairError {
    /// One of the inputs failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded inputs could not be merged.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// The merged output could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl PairError {
    /// Short machine-readable reason, used in batch reports.
    pub fn code(&self) -> &'static str {
        match self {
            PairError::Decode(_) => "decode_error",
            PairError::Merge(MergeError::IncompatibleFormats { .. }) => "incompatible_formats",
            PairError::Merge(MergeError::NotMono { .. }) => "not_mono",
            PairError::Write(WriteError::Io { .. }) => "io_error",
            PairError::Write(_) => "unwritable_format",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_path() {
        let err = DecodeError::new(
            Path::new("/tmp/broken.wav"),
            DecodeErrorKind::malformed("no RIFF tag"),
        );
        let msg = err.to_string();
        assert!(msg.contains("broken.wav"));
        assert!(msg.contains("no RIFF tag"));
    }

    #[test]
    fn test_incompatible_formats_message() {
        let err = MergeError::IncompatibleFormats {
            left: SampleFormat::new(2, 8000),
            right: SampleFormat::new(2, 16000),
        };
        let msg = err.to_string();
        assert!(msg.contains("8000"));
        assert!(msg.contains("16000"));
    }

    #[test]
    fn test_pair_error_codes() {
        let merge = PairError::from(MergeError::IncompatibleFormats {
            left: SampleFormat::new(1, 8000),
            right: SampleFormat::new(2, 8000),
        });
        assert_eq!(merge.code(), "incompatible_formats");

        let decode = PairError::from(DecodeError::new(
            Path::new("x.wav"),
            DecodeErrorKind::UnsupportedWidth { bits: 12 },
        ));
        assert_eq!(decode.code(), "decode_error");

        let write = PairError::from(WriteError::io(
            Path::new("out.wav"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert_eq!(write.code(), "io_error");

        let overflow = PairError::from(WriteError::HeaderOverflow {
            channels: 2,
            sample_rate: 3_000_000_000,
            bits_per_sample: 8,
        });
        assert_eq!(overflow.code(), "unwritable_format");
    }

    #[test]
    fn test_hound_unsupported_maps_to_encoding() {
        let kind = DecodeErrorKind::from(hound::Error::Unsupported);
        assert!(matches!(kind, DecodeErrorKind::UnsupportedEncoding { .. }));

        let kind = DecodeErrorKind::from(hound::Error::FormatError("no RIFF tag found"));
        assert!(matches!(kind, DecodeErrorKind::Malformed { .. }));
    }
}
