//! PCM WAV file writer.
//!
//! Writes canonical 44-byte-header integer PCM WAV files at any sample width
//! from 1 to 4 bytes. Output files are written through a temporary file and
//! renamed into place, so a failed write never leaves a truncated file.

mod format;
mod pcm;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::encode_samples;
pub use writer::{write, write_wav, write_wav_to_vec};

pub(crate) use writer::ensure_dir;
