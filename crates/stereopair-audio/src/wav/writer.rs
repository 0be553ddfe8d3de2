//! Core WAV serialization.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

use crate::buffer::AudioBuffer;
use crate::error::WriteError;

use super::format::WavFormat;
use super::pcm::encode_samples;

/// Largest data chunk a RIFF header can describe.
const MAX_DATA_BYTES: usize = (u32::MAX - 37) as usize;

/// Emits the 44-byte header followed by `pcm_data` (already encoded at
/// `format.bits_per_sample`).
///
/// Fails with `InvalidInput` if the data is too large for a RIFF size field
/// or the frame layout overflows the `fmt ` chunk fields.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let (block_align, byte_rate) = format
        .block_align()
        .zip(format.byte_rate())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "fmt chunk fields overflow"))?;
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|&size| size as usize <= MAX_DATA_BYTES)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "PCM data exceeds 4 GiB"))?;
    let pad = data_size % 2;
    let file_size = 36 + data_size + pad; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    // Odd-sized data chunks carry one pad byte
    if pad == 1 {
        writer.write_all(&[0])?;
    }

    Ok(())
}

/// Serializes a buffer to a complete WAV file in memory.
///
/// # Errors
/// Fails if the header fields overflow, a sample does not fit the buffer's
/// sample width, or the data does not fit in a RIFF file.
pub fn write_wav_to_vec(buffer: &AudioBuffer) -> Result<Vec<u8>, WriteError> {
    let format = WavFormat::of(buffer);
    if format.byte_rate().is_none() {
        return Err(WriteError::HeaderOverflow {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bits_per_sample,
        });
    }

    let pcm = encode_samples(buffer.samples(), buffer.format().sample_width_bytes)?;

    if pcm.len() > MAX_DATA_BYTES {
        return Err(WriteError::DataTooLarge { bytes: pcm.len() });
    }

    let mut bytes = Vec::with_capacity(44 + pcm.len() + 1);
    write_wav(&mut bytes, &format, &pcm).expect("writing to Vec should not fail");
    Ok(bytes)
}

/// Writes `buffer` as a WAV file at `path`, replacing any existing file.
///
/// The file is written to a temporary file in the same directory and renamed
/// over `path` once complete. A new file gets the usual umask-derived mode; a
/// replaced file keeps the mode it had.
pub fn write(path: &Path, buffer: &AudioBuffer) -> Result<(), WriteError> {
    let bytes = write_wav_to_vec(buffer)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".stereopair-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| WriteError::io(path, e))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| WriteError::io(path, e))?;
    }
    tmp.write_all(&bytes).map_err(|e| WriteError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| WriteError::io(path, e))?;
    tmp.persist(path).map_err(|e| WriteError::io(path, e.error))?;

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        frames = buffer.frames(),
        "wrote WAV file"
    );
    Ok(())
}

/// Creates `dir` and any missing parents.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|e| WriteError::io(dir, e))
}
