use serde::{Deserialize, Serialize};

/// Category of an enumerated audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// Plain capture device (microphone).
    Input,
    /// Render device (speaker or headphones), used as the loopback reference.
    Output,
    /// Capture device that mirrors an output device's outgoing signal.
    LoopbackInput,
}

/// One entry from the audio subsystem's device enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub kind: DeviceKind,
    /// Whether the platform reports this as the default device of its kind.
    pub is_default: bool,
}

impl DeviceInfo {
    pub fn new(name: impl Into<String>, kind: DeviceKind, is_default: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            is_default,
        }
    }
}

/// Caller-supplied device overrides.
///
/// `None` means platform default; for the loopback device it means
/// name-derivation from the resolved output device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSelection {
    pub mic_name: Option<String>,
    pub speaker_name: Option<String>,
    pub loopback_name: Option<String>,
}

/// The concrete devices a session will capture from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDevices {
    pub mic: DeviceInfo,
    pub output: DeviceInfo,
    pub loopback: DeviceInfo,
}
