//! Blocking capture stream over a cpal input stream.
//!
//! cpal delivers samples through a callback on its own audio thread; the
//! core wants a blocking "read N frames" pull. The callback forwards each
//! chunk over a channel and `read_frames` drains it, carrying any excess
//! samples to the next call.

use std::sync::Arc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, StreamConfig};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use parking_lot::Mutex;

use dualcap_core::capture::block::AudioBlock;
use dualcap_core::models::config::RecordingConfig;
use dualcap_core::models::error::CaptureError;
use dualcap_core::traits::backend::CaptureStream;

/// How often `read_frames` wakes to check the error slot while waiting for
/// samples. Not a capture timeout; the wait itself is unbounded.
const ERROR_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) struct CpalCaptureStream {
    // Held so the device stays open; dropping it stops capture and
    // releases the device.
    _stream: cpal::Stream,
    rx: Receiver<Vec<f32>>,
    error: Arc<Mutex<Option<String>>>,
    pending: Vec<f32>,
    channels: u16,
}

impl CpalCaptureStream {
    pub(crate) fn open(
        device: &cpal::Device,
        config: &RecordingConfig,
    ) -> Result<Box<dyn CaptureStream>, CaptureError> {
        let stream_config = StreamConfig {
            channels: config.channels,
            sample_rate: SampleRate(config.samplerate),
            buffer_size: BufferSize::Default,
        };

        let (tx, rx) = crossbeam_channel::unbounded::<Vec<f32>>();
        let error = Arc::new(Mutex::new(None));
        let error_slot = Arc::clone(&error);

        let stream = device
            .build_input_stream(
                &stream_config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    // Receiver gone means the session is over; nothing to do.
                    let _ = tx.send(data.to_vec());
                },
                move |err| {
                    log::error!("capture stream error: {}", err);
                    let mut slot = error_slot.lock();
                    if slot.is_none() {
                        *slot = Some(err.to_string());
                    }
                },
                None,
            )
            .map_err(|e| {
                CaptureError::CaptureFailure(format!("failed to open capture stream: {}", e))
            })?;

        stream.play().map_err(|e| {
            CaptureError::CaptureFailure(format!("failed to start capture stream: {}", e))
        })?;

        Ok(Box::new(Self {
            _stream: stream,
            rx,
            error,
            pending: Vec::new(),
            channels: config.channels,
        }))
    }

    fn take_error(&self) -> Option<CaptureError> {
        self.error.lock().take().map(CaptureError::CaptureFailure)
    }
}

impl CaptureStream for CpalCaptureStream {
    fn read_frames(&mut self, frames: usize) -> Result<AudioBlock, CaptureError> {
        let needed = frames * self.channels as usize;

        while self.pending.len() < needed {
            if let Some(err) = self.take_error() {
                return Err(err);
            }
            match self.rx.recv_timeout(ERROR_POLL_INTERVAL) {
                Ok(chunk) => self.pending.extend(chunk),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(self.take_error().unwrap_or_else(|| {
                        CaptureError::CaptureFailure("capture stream closed unexpectedly".into())
                    }));
                }
            }
        }

        let rest = self.pending.split_off(needed);
        let samples = std::mem::replace(&mut self.pending, rest);
        Ok(AudioBlock::new(samples, self.channels))
    }
}
