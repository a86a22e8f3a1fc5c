//! Session orchestration: resolve devices, capture both streams, convert,
//! and write the output files.

use std::path::{Path, PathBuf};

use log::info;

use crate::capture::coordinator::DualCaptureCoordinator;
use crate::devices::resolver;
use crate::models::config::RecordingConfig;
use crate::models::device::DeviceSelection;
use crate::models::error::CaptureError;
use crate::models::result::{RecordingMetadata, RecordingResult, TrackFile, TrackKind};
use crate::processing::{converter, mixer};
use crate::storage::wav_writer;
use crate::traits::backend::AudioBackend;

/// Caller-supplied destinations for the session's output files.
///
/// `mix` left as `None` skips the mix-down entirely: no third file, no
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub mic: PathBuf,
    pub system: PathBuf,
    pub mix: Option<PathBuf>,
}

/// Run one bounded dual-stream capture session end to end.
///
/// Resolution happens before any device is opened; a resolution failure
/// therefore leaves zero files on disk. Capture failures likewise abort
/// before the first write. Write failures surface immediately, leaving any
/// files already written in place.
pub fn record_dual(
    backend: &dyn AudioBackend,
    config: &RecordingConfig,
    selection: &DeviceSelection,
    outputs: &OutputPaths,
) -> Result<RecordingResult, CaptureError> {
    config.validate()?;

    let devices = backend.devices()?;
    let resolved = resolver::resolve(&devices, selection)?;
    info!(
        "recording {:.2}s at {} Hz from mic \"{}\" and loopback \"{}\"",
        config.seconds, config.samplerate, resolved.mic.name, resolved.loopback.name
    );

    let pair = DualCaptureCoordinator::new(backend, config).capture(&resolved.mic, &resolved.loopback)?;
    let frames = pair.frames();

    let mic_pcm = converter::convert(pair.mic.samples(), pair.mic.channels(), config.channels);
    let system_pcm = converter::convert(pair.system.samples(), pair.system.channels(), config.channels);

    wav_writer::write_wav(&outputs.mic, &mic_pcm, config.samplerate)?;
    wav_writer::write_wav(&outputs.system, &system_pcm, config.samplerate)?;

    let mut tracks = vec![
        track_entry(TrackKind::Mic, &outputs.mic)?,
        track_entry(TrackKind::System, &outputs.system)?,
    ];

    let mix_path = match &outputs.mix {
        Some(path) => {
            let mixed = mixer::mix_pair(&pair);
            let mix_pcm = converter::convert(&mixed, pair.mic.channels(), config.channels);
            wav_writer::write_wav(path, &mix_pcm, config.samplerate)?;
            tracks.push(track_entry(TrackKind::Mix, path)?);
            Some(path.clone())
        }
        None => None,
    };

    info!("recording complete: {} frames per track", frames);

    Ok(RecordingResult {
        mic_path: outputs.mic.clone(),
        system_path: outputs.system.clone(),
        mix_path,
        frames,
        metadata: RecordingMetadata::new(config.samplerate, config.channels, frames, tracks),
    })
}

fn track_entry(track: TrackKind, path: &Path) -> Result<TrackFile, CaptureError> {
    Ok(TrackFile {
        track,
        path: path.display().to_string(),
        checksum: wav_writer::checksum_file(path)?,
    })
}
