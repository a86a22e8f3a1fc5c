use std::fs;
use std::path::Path;

use crate::models::error::CaptureError;
use crate::models::result::RecordingMetadata;

/// Write recording metadata as a pretty-printed JSON file at `path`.
pub fn write_sidecar(metadata: &RecordingMetadata, path: &Path) -> Result<(), CaptureError> {
    let json = serde_json::to_string_pretty(metadata)
        .map_err(|e| CaptureError::IoFailure(format!("failed to serialize metadata: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| CaptureError::IoFailure(format!("failed to write metadata: {}", e)))?;
    Ok(())
}

/// Read recording metadata back from a JSON sidecar.
pub fn read_sidecar(path: &Path) -> Result<RecordingMetadata, CaptureError> {
    let json = fs::read_to_string(path)
        .map_err(|e| CaptureError::IoFailure(format!("failed to read metadata: {}", e)))?;
    serde_json::from_str(&json)
        .map_err(|e| CaptureError::IoFailure(format!("failed to parse metadata: {}", e)))
}
