use crate::capture::block::AudioBlock;
use crate::models::config::RecordingConfig;
use crate::models::device::DeviceInfo;
use crate::models::error::CaptureError;

/// Blocking capture handle for one opened device.
///
/// The device stays acquired for the lifetime of the value and is released
/// when it is dropped, on every exit path. Streams are used from exactly one
/// capture thread.
pub trait CaptureStream {
    /// Block until `frames` frames are available and return them as one
    /// block. Any device or driver error aborts the stream.
    fn read_frames(&mut self, frames: usize) -> Result<AudioBlock, CaptureError>;
}

/// Interface to the platform audio subsystem.
///
/// Implemented by `dualcap-cpal` in production and by scripted fakes in
/// tests, so resolution and coordination logic run without real hardware.
pub trait AudioBackend: Send + Sync {
    /// Snapshot of the available devices with category and display name.
    /// A pure query: nothing is opened.
    fn devices(&self) -> Result<Vec<DeviceInfo>, CaptureError>;

    /// Open `device` for capture at the configured sample rate, channel
    /// count, and block size.
    fn open_capture(
        &self,
        device: &DeviceInfo,
        config: &RecordingConfig,
    ) -> Result<Box<dyn CaptureStream>, CaptureError>;
}
