//! # dualcap-cpal
//!
//! cpal backend for dualcap. Implements the core's `AudioBackend` and
//! `CaptureStream` traits on top of cpal's host/device/stream API:
//!
//! - `CpalBackend` — device enumeration with loopback classification
//!   (PulseAudio/PipeWire monitor sources show up as input devices whose
//!   names carry a "monitor"/"loopback" marker)
//! - blocking block reads bridged from cpal's callback delivery via a
//!   channel, so the core's pull-based capture loops work unchanged
//!
//! ## Usage
//! ```ignore
//! use dualcap_core::{record_dual, DeviceSelection, OutputPaths, RecordingConfig};
//! use dualcap_cpal::CpalBackend;
//!
//! let backend = CpalBackend::new();
//! let result = record_dual(&backend, &RecordingConfig::default(),
//!                          &DeviceSelection::default(), &outputs)?;
//! ```

pub mod backend;
mod stream;

pub use backend::CpalBackend;
