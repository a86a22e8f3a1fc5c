use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which logical stream a written file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Mic,
    System,
    Mix,
}

/// One output file of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFile {
    pub track: TrackKind,
    pub path: String,
    /// SHA-256 hex digest of the finished file.
    pub checksum: String,
}

/// Serializable description of a completed recording, suitable for a JSON
/// sidecar or export to a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    pub id: String,
    pub created_at: String,
    pub samplerate: u32,
    pub channels: u16,
    /// Aligned frame count shared by every track.
    pub frames: usize,
    pub duration_secs: f64,
    pub tracks: Vec<TrackFile>,
}

impl RecordingMetadata {
    pub fn new(samplerate: u32, channels: u16, frames: usize, tracks: Vec<TrackFile>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            samplerate,
            channels,
            frames,
            duration_secs: frames as f64 / samplerate as f64,
            tracks,
        }
    }
}

/// Result returned when a capture session completes successfully,
/// identifying every file actually written.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingResult {
    pub mic_path: PathBuf,
    pub system_path: PathBuf,
    /// `None` when the caller did not request a mix.
    pub mix_path: Option<PathBuf>,
    pub frames: usize,
    pub metadata: RecordingMetadata,
}
