//! StereoPair Audio Core
//!
//! Turns two PCM WAV files into one stereo WAV file: each input is decoded and
//! downmixed to mono, the shorter one is padded with silence, and the two are
//! interleaved as left and right channels.
//!
//! # Overview
//!
//! All sample values are carried as `i32` in the signed range of the file's
//! sample width, so 8, 16, 24 and 32-bit PCM share one code path. Nothing is
//! resampled, clipped or normalized; pairs with differing sample widths or
//! frame rates are rejected.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stereopair_audio::{decode, merge, wav};
//!
//! let left = decode(Path::new("a.wav"))?;
//! let right = decode(Path::new("b.wav"))?;
//! let stereo = merge(&left, &right)?;
//! wav::write(Path::new("out/a_b_merged.wav"), &stereo)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`decode()`] - WAV decoding and floor-mean downmixing
//! - [`merge()`] - Format check, silence padding and interleaving
//! - [`wav`] - PCM WAV writer, generic over sample width
//! - [`merge_pair()`] - The full decode/merge/write sequence for one pair

pub mod buffer;
pub mod decode;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod wav;

pub use buffer::{AudioBuffer, SampleFormat};
pub use decode::{decode, downmix};
pub use error::{DecodeError, DecodeErrorKind, MergeError, PairError, WriteError};
pub use merge::{interleave, merge, pad_to_length};
pub use pipeline::{merge_pair, output_file_name, PairOutcome};
