//! Output writer: `Int16Buffer` to a WAV file on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::models::error::CaptureError;
use crate::processing::converter::Int16Buffer;
use crate::storage::wav_format;

/// Serialize `buffer` as a 16-bit linear PCM WAV file at `path`.
///
/// Creates the parent directory if missing. Any filesystem error surfaces
/// as `IoFailure` without retry; a file partially written before the error
/// is left in place.
pub fn write_wav(path: &Path, buffer: &Int16Buffer, samplerate: u32) -> Result<(), CaptureError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_failure)?;
        }
    }

    let data_len = (buffer.samples().len() * 2) as u32;
    let file = File::create(path).map_err(io_failure)?;
    let mut out = BufWriter::new(file);

    out.write_all(&wav_format::pcm16_header(samplerate, buffer.channels(), data_len))
        .map_err(io_failure)?;
    for &sample in buffer.samples() {
        out.write_all(&sample.to_le_bytes()).map_err(io_failure)?;
    }
    out.flush().map_err(io_failure)?;

    log::debug!(
        "wrote {} ({} frames, {} ch, {} Hz)",
        path.display(),
        buffer.frames(),
        buffer.channels(),
        samplerate
    );
    Ok(())
}

/// SHA-256 hex digest of a finished file.
pub fn checksum_file(path: &Path) -> Result<String, CaptureError> {
    let data = fs::read(path).map_err(io_failure)?;
    let digest = Sha256::digest(&data);
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

fn io_failure(e: std::io::Error) -> CaptureError {
    CaptureError::IoFailure(e.to_string())
}
