//! Device enumeration and capture-stream opening via cpal.

use cpal::traits::{DeviceTrait, HostTrait};

use dualcap_core::models::config::RecordingConfig;
use dualcap_core::models::device::{DeviceInfo, DeviceKind};
use dualcap_core::models::error::CaptureError;
use dualcap_core::traits::backend::{AudioBackend, CaptureStream};

use crate::stream::CpalCaptureStream;

/// `AudioBackend` implementation over the platform's default cpal host.
///
/// Holds no host handle; cpal hosts are cheap to obtain and this keeps the
/// backend trivially shareable across the two capture threads.
#[derive(Debug, Default)]
pub struct CpalBackend;

impl CpalBackend {
    pub fn new() -> Self {
        Self
    }
}

impl AudioBackend for CpalBackend {
    fn devices(&self) -> Result<Vec<DeviceInfo>, CaptureError> {
        let host = cpal::default_host();

        let default_input = host.default_input_device().and_then(|d| d.name().ok());
        let default_output = host.default_output_device().and_then(|d| d.name().ok());

        let mut devices = Vec::new();

        let inputs = host
            .input_devices()
            .map_err(|e| CaptureError::CaptureFailure(format!("device enumeration failed: {}", e)))?;
        for device in inputs {
            // Skip devices whose names can't be read rather than failing
            // the whole enumeration.
            let Ok(name) = device.name() else { continue };
            let kind = if is_loopback_name(&name) {
                DeviceKind::LoopbackInput
            } else {
                DeviceKind::Input
            };
            let is_default =
                kind == DeviceKind::Input && default_input.as_deref() == Some(name.as_str());
            devices.push(DeviceInfo::new(name, kind, is_default));
        }

        let outputs = host
            .output_devices()
            .map_err(|e| CaptureError::CaptureFailure(format!("device enumeration failed: {}", e)))?;
        for device in outputs {
            let Ok(name) = device.name() else { continue };
            let is_default = default_output.as_deref() == Some(name.as_str());
            devices.push(DeviceInfo::new(name, DeviceKind::Output, is_default));
        }

        Ok(devices)
    }

    fn open_capture(
        &self,
        device: &DeviceInfo,
        config: &RecordingConfig,
    ) -> Result<Box<dyn CaptureStream>, CaptureError> {
        if device.kind == DeviceKind::Output {
            return Err(CaptureError::CaptureFailure(format!(
                "\"{}\" is an output device; capture its monitor source instead",
                device.name
            )));
        }

        let host = cpal::default_host();
        let mut inputs = host
            .input_devices()
            .map_err(|e| CaptureError::CaptureFailure(format!("device enumeration failed: {}", e)))?;
        let cpal_device = inputs
            .find(|d| d.name().map(|n| n == device.name).unwrap_or(false))
            .ok_or_else(|| CaptureError::DeviceNotFound(device.name.clone()))?;

        log::debug!("opening capture stream on \"{}\"", device.name);
        CpalCaptureStream::open(&cpal_device, config)
    }
}

/// Monitor-source naming convention used by PulseAudio/PipeWire (and by
/// most virtual loopback drivers).
fn is_loopback_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("monitor") || lower.contains("loopback")
}
