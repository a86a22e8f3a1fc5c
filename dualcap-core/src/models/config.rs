use crate::models::error::CaptureError;

/// Parameters for one capture session.
///
/// Constructed once from caller input and read-only for the lifetime of the
/// session; both capture loops and the output writer see the same values.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingConfig {
    /// Sample rate in Hz.
    pub samplerate: u32,

    /// Number of channels each stream is opened with.
    pub channels: u16,

    /// Capture duration in seconds. May be fractional.
    pub seconds: f64,

    /// Frames requested per capture call.
    pub blocksize: usize,
}

impl RecordingConfig {
    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.samplerate == 0 {
            return Err(CaptureError::InvalidConfig("sample rate must be positive".into()));
        }
        if self.channels == 0 {
            return Err(CaptureError::InvalidConfig("channel count must be positive".into()));
        }
        if !(self.seconds > 0.0) {
            return Err(CaptureError::InvalidConfig(format!(
                "duration must be positive, got {}",
                self.seconds
            )));
        }
        if self.blocksize == 0 {
            return Err(CaptureError::InvalidConfig("block size must be positive".into()));
        }
        Ok(())
    }

    /// Total frames each capture loop requests: `ceil(seconds * samplerate)`.
    pub fn total_frames(&self) -> usize {
        (self.seconds * self.samplerate as f64).ceil() as usize
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            samplerate: 48_000,
            channels: 1,
            seconds: 10.0,
            blocksize: 1024,
        }
    }
}
