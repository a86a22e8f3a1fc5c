use thiserror::Error;

/// Errors that can occur during a capture session.
///
/// Every variant is terminal for the session: nothing is retried, partial
/// capture buffers are discarded, and files written before a later failure
/// are left on disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("device not found: {0}")]
    DeviceNotFound(String),

    #[error("no loopback device matches output \"{0}\"; pass an explicit loopback device name")]
    LoopbackResolutionFailed(String),

    #[error("capture failed: {0}")]
    CaptureFailure(String),

    #[error("i/o failure: {0}")]
    IoFailure(String),
}
