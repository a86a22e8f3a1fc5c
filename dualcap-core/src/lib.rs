//! # dualcap-core
//!
//! Platform-agnostic core for synchronized dual-stream audio capture:
//! records a microphone and the system's output (loopback) for a bounded
//! duration, converts both to 16-bit PCM, and writes equal-length WAV files
//! plus an optional additive mix.
//!
//! Platform backends implement the `AudioBackend`/`CaptureStream` traits
//! (see `dualcap-cpal`) and plug into the generic session.
//!
//! ## Architecture
//!
//! ```text
//! dualcap-core (this crate)
//! ├── traits/       ← AudioBackend, CaptureStream
//! ├── models/       ← RecordingConfig, CaptureError, DeviceInfo, RecordingResult
//! ├── devices/      ← pure name-based device resolution (incl. loopback matching)
//! ├── capture/      ← AudioBlock/StreamBuffer/AlignedPair, DualCaptureCoordinator
//! ├── processing/   ← f32 → i16 conversion, additive mixing
//! ├── session/      ← record_dual orchestration
//! └── storage/      ← WAV header + file output, metadata sidecar
//! ```

pub mod capture;
pub mod devices;
pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use capture::block::{AlignedPair, AudioBlock, StreamBuffer};
pub use capture::coordinator::DualCaptureCoordinator;
pub use models::config::RecordingConfig;
pub use models::device::{DeviceInfo, DeviceKind, DeviceSelection, ResolvedDevices};
pub use models::error::CaptureError;
pub use models::result::{RecordingMetadata, RecordingResult, TrackFile, TrackKind};
pub use processing::converter::Int16Buffer;
pub use session::recorder::{record_dual, OutputPaths};
pub use traits::backend::{AudioBackend, CaptureStream};
