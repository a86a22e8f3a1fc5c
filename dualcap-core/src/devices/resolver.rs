//! Device resolution: logical selectors to concrete devices.
//!
//! Pure functions over an enumerated device list. Nothing is opened here,
//! so resolution is testable with an injected fake enumeration.

use crate::models::device::{DeviceInfo, DeviceKind, DeviceSelection, ResolvedDevices};
use crate::models::error::CaptureError;

/// Resolve the microphone, output, and loopback devices for a session.
///
/// Explicit names must match exactly (`DeviceNotFound` otherwise). Absent
/// names fall back to the platform default of that kind. An absent loopback
/// name is derived from the resolved output device by name matching.
pub fn resolve(
    devices: &[DeviceInfo],
    selection: &DeviceSelection,
) -> Result<ResolvedDevices, CaptureError> {
    let mic = pick(devices, DeviceKind::Input, selection.mic_name.as_deref())?;
    let output = pick(devices, DeviceKind::Output, selection.speaker_name.as_deref())?;

    let loopback = match selection.loopback_name.as_deref() {
        Some(name) => find_named(devices, DeviceKind::LoopbackInput, name)?,
        None => loopback_for_output(devices, &output)?,
    };

    Ok(ResolvedDevices {
        mic,
        output,
        loopback,
    })
}

/// Find the loopback device mirroring `output`, by name.
///
/// Precedence: exact name equality first, then case-insensitive substring
/// (the output name contained in the loopback name, the usual convention
/// for monitor sources). Failure carries the output device's name so the
/// caller can retry with an explicit override.
pub fn loopback_for_output(
    devices: &[DeviceInfo],
    output: &DeviceInfo,
) -> Result<DeviceInfo, CaptureError> {
    let loopbacks = || devices.iter().filter(|d| d.kind == DeviceKind::LoopbackInput);

    if let Some(exact) = loopbacks().find(|d| d.name == output.name) {
        return Ok(exact.clone());
    }

    let needle = output.name.to_lowercase();
    if let Some(partial) = loopbacks().find(|d| d.name.to_lowercase().contains(&needle)) {
        return Ok(partial.clone());
    }

    Err(CaptureError::LoopbackResolutionFailed(output.name.clone()))
}

fn pick(
    devices: &[DeviceInfo],
    kind: DeviceKind,
    name: Option<&str>,
) -> Result<DeviceInfo, CaptureError> {
    match name {
        Some(name) => find_named(devices, kind, name),
        None => default_of(devices, kind),
    }
}

fn find_named(devices: &[DeviceInfo], kind: DeviceKind, name: &str) -> Result<DeviceInfo, CaptureError> {
    devices
        .iter()
        .find(|d| d.kind == kind && d.name == name)
        .cloned()
        .ok_or_else(|| CaptureError::DeviceNotFound(name.to_string()))
}

/// The device the platform flags as default, or the first of that kind when
/// no default is flagged.
fn default_of(devices: &[DeviceInfo], kind: DeviceKind) -> Result<DeviceInfo, CaptureError> {
    let mut of_kind = devices.iter().filter(|d| d.kind == kind);
    of_kind
        .clone()
        .find(|d| d.is_default)
        .or_else(|| of_kind.next())
        .cloned()
        .ok_or_else(|| {
            let what = match kind {
                DeviceKind::Input => "default input device",
                DeviceKind::Output => "default output device",
                DeviceKind::LoopbackInput => "default loopback device",
            };
            CaptureError::DeviceNotFound(what.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enumeration() -> Vec<DeviceInfo> {
        vec![
            DeviceInfo::new("USB Microphone", DeviceKind::Input, false),
            DeviceInfo::new("Built-in Microphone", DeviceKind::Input, true),
            DeviceInfo::new("Built-in Speakers", DeviceKind::Output, true),
            DeviceInfo::new("HDMI Output", DeviceKind::Output, false),
            DeviceInfo::new("Monitor of Built-in Speakers", DeviceKind::LoopbackInput, false),
        ]
    }

    #[test]
    fn defaults_resolve_without_selectors() {
        let resolved = resolve(&enumeration(), &DeviceSelection::default()).unwrap();

        assert_eq!(resolved.mic.name, "Built-in Microphone");
        assert_eq!(resolved.output.name, "Built-in Speakers");
        assert_eq!(resolved.loopback.name, "Monitor of Built-in Speakers");
    }

    #[test]
    fn explicit_mic_name_exact_match() {
        let selection = DeviceSelection {
            mic_name: Some("USB Microphone".into()),
            ..Default::default()
        };
        let resolved = resolve(&enumeration(), &selection).unwrap();
        assert_eq!(resolved.mic.name, "USB Microphone");
    }

    #[test]
    fn unknown_mic_name_fails_with_requested_name() {
        let selection = DeviceSelection {
            mic_name: Some("Ghost Mic".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve(&enumeration(), &selection),
            Err(CaptureError::DeviceNotFound("Ghost Mic".into()))
        );
    }

    #[test]
    fn explicit_loopback_name_must_be_loopback_capable() {
        // Present in the enumeration, but as a plain input.
        let selection = DeviceSelection {
            loopback_name: Some("USB Microphone".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve(&enumeration(), &selection),
            Err(CaptureError::DeviceNotFound("USB Microphone".into()))
        );
    }

    #[test]
    fn loopback_exact_match_beats_substring() {
        let devices = vec![
            DeviceInfo::new("Mic", DeviceKind::Input, true),
            DeviceInfo::new("Speakers", DeviceKind::Output, true),
            DeviceInfo::new("Speakers (Loopback)", DeviceKind::LoopbackInput, false),
            DeviceInfo::new("Speakers", DeviceKind::LoopbackInput, false),
        ];
        let resolved = resolve(&devices, &DeviceSelection::default()).unwrap();
        assert_eq!(resolved.loopback.kind, DeviceKind::LoopbackInput);
        assert_eq!(resolved.loopback.name, "Speakers");
    }

    #[test]
    fn loopback_substring_match_is_case_insensitive() {
        let devices = vec![
            DeviceInfo::new("Mic", DeviceKind::Input, true),
            DeviceInfo::new("HDMI Output", DeviceKind::Output, true),
            DeviceInfo::new("Monitor of hdmi output", DeviceKind::LoopbackInput, false),
        ];
        let resolved = resolve(&devices, &DeviceSelection::default()).unwrap();
        assert_eq!(resolved.loopback.name, "Monitor of hdmi output");
    }

    #[test]
    fn unmatched_loopback_carries_output_name() {
        let devices = vec![
            DeviceInfo::new("Mic", DeviceKind::Input, true),
            DeviceInfo::new("Bluetooth Headset", DeviceKind::Output, true),
            DeviceInfo::new("Monitor of Built-in Speakers", DeviceKind::LoopbackInput, false),
        ];
        assert_eq!(
            resolve(&devices, &DeviceSelection::default()),
            Err(CaptureError::LoopbackResolutionFailed("Bluetooth Headset".into()))
        );
    }

    #[test]
    fn no_input_devices_at_all() {
        let devices = vec![DeviceInfo::new("Speakers", DeviceKind::Output, true)];
        assert!(matches!(
            resolve(&devices, &DeviceSelection::default()),
            Err(CaptureError::DeviceNotFound(_))
        ));
    }

    #[test]
    fn falls_back_to_first_of_kind_without_default_flag() {
        let devices = vec![
            DeviceInfo::new("Mic A", DeviceKind::Input, false),
            DeviceInfo::new("Mic B", DeviceKind::Input, false),
            DeviceInfo::new("Out", DeviceKind::Output, false),
            DeviceInfo::new("Monitor of Out", DeviceKind::LoopbackInput, false),
        ];
        let resolved = resolve(&devices, &DeviceSelection::default()).unwrap();
        assert_eq!(resolved.mic.name, "Mic A");
    }
}
