//! Dual capture coordination.
//!
//! Two bounded capture loops run on their own threads, one per stream, with
//! no shared mutable state; each loop owns its device handle and its buffer.
//! The scope join is the barrier: conversion and writing start only after
//! both loops have finished.

use std::thread;

use log::debug;

use crate::capture::block::{AlignedPair, StreamBuffer};
use crate::models::config::RecordingConfig;
use crate::models::device::DeviceInfo;
use crate::models::error::CaptureError;
use crate::traits::backend::AudioBackend;

/// Runs the microphone and loopback capture loops concurrently and joins
/// them into an aligned pair of equal-length buffers.
pub struct DualCaptureCoordinator<'a> {
    backend: &'a dyn AudioBackend,
    config: &'a RecordingConfig,
}

impl<'a> DualCaptureCoordinator<'a> {
    pub fn new(backend: &'a dyn AudioBackend, config: &'a RecordingConfig) -> Self {
        Self { backend, config }
    }

    /// Capture both streams to completion and align them.
    ///
    /// Both loops request exactly `config.total_frames()` frames; actual
    /// totals can differ under device timing jitter, so the result is
    /// truncated to the shorter stream. If either loop fails the whole
    /// session fails and the partial buffers are dropped; when both fail,
    /// the microphone loop's error wins (start order).
    pub fn capture(
        &self,
        mic: &DeviceInfo,
        loopback: &DeviceInfo,
    ) -> Result<AlignedPair, CaptureError> {
        let (mic_result, system_result) = thread::scope(|s| {
            let mic_loop = thread::Builder::new()
                .name("capture-mic".into())
                .spawn_scoped(s, || capture_loop(self.backend, mic, self.config));
            let system_loop = thread::Builder::new()
                .name("capture-system".into())
                .spawn_scoped(s, || capture_loop(self.backend, loopback, self.config));

            (finish(mic_loop, "microphone"), finish(system_loop, "system"))
        });

        let mic_buffer = mic_result?;
        let system_buffer = system_result?;

        debug!(
            "captured mic={} frames, system={} frames; aligning to {}",
            mic_buffer.frames(),
            system_buffer.frames(),
            mic_buffer.frames().min(system_buffer.frames())
        );

        Ok(AlignedPair::align(mic_buffer, system_buffer))
    }
}

/// One bounded capture loop: scoped device open, block-by-block reads until
/// the requested frame total is reached.
///
/// The stream is dropped on every exit path, releasing the device whether
/// the loop completed or errored.
fn capture_loop(
    backend: &dyn AudioBackend,
    device: &DeviceInfo,
    config: &RecordingConfig,
) -> Result<StreamBuffer, CaptureError> {
    let mut stream = backend.open_capture(device, config)?;
    let mut buffer = StreamBuffer::new(config.channels);

    let mut remaining = config.total_frames();
    while remaining > 0 {
        let request = config.blocksize.min(remaining);
        let block = stream.read_frames(request)?;
        buffer.push_block(block);
        remaining -= request;
    }

    debug!(
        "capture loop for \"{}\" done: {} frames buffered",
        device.name,
        buffer.frames()
    );
    Ok(buffer)
}

fn finish(
    handle: std::io::Result<thread::ScopedJoinHandle<'_, Result<StreamBuffer, CaptureError>>>,
    which: &str,
) -> Result<StreamBuffer, CaptureError> {
    match handle {
        Ok(h) => h.join().unwrap_or_else(|_| {
            Err(CaptureError::CaptureFailure(format!(
                "{} capture thread panicked",
                which
            )))
        }),
        Err(e) => Err(CaptureError::CaptureFailure(format!(
            "failed to spawn {} capture thread: {}",
            which, e
        ))),
    }
}
