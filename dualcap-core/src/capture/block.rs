//! Sample containers produced by the capture loops.
//!
//! All samples are interleaved f32, frames × channels. Values are nominally
//! in [-1.0, 1.0] but hardware can deliver NaN or infinities; sanitization
//! happens later, in the converter.

/// One chunk of consecutive frames returned by a single capture request.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBlock {
    samples: Vec<f32>,
    channels: u16,
}

impl AudioBlock {
    /// `samples.len()` must be a multiple of `channels`.
    pub fn new(samples: Vec<f32>, channels: u16) -> Self {
        debug_assert!(channels > 0);
        debug_assert_eq!(samples.len() % channels as usize, 0);
        Self { samples, channels }
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

/// Append-only sample storage for one logical stream.
///
/// Owned exclusively by the capture loop that fills it, then moved out to
/// the alignment/conversion stage once capture completes.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamBuffer {
    samples: Vec<f32>,
    channels: u16,
}

impl StreamBuffer {
    pub fn new(channels: u16) -> Self {
        debug_assert!(channels > 0);
        Self {
            samples: Vec::new(),
            channels,
        }
    }

    /// Append a block in arrival order. The block must share this buffer's
    /// channel count.
    pub fn push_block(&mut self, block: AudioBlock) {
        debug_assert_eq!(block.channels(), self.channels);
        self.samples.extend(block.into_samples());
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Drop any frames past `frames`, keeping the leading time window.
    pub fn truncate_frames(&mut self, frames: usize) {
        let keep = frames.saturating_mul(self.channels as usize);
        self.samples.truncate(keep);
    }
}

/// The mic and system buffers cut to a common frame count.
///
/// Invariant: both members hold exactly `frames()` frames with identical
/// channel counts, so downstream conversion and mixing can zip them.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    pub mic: StreamBuffer,
    pub system: StreamBuffer,
}

impl AlignedPair {
    /// Truncate both buffers to the shorter one's frame count.
    ///
    /// Independent device clocks mean the raw totals can differ slightly;
    /// cutting to the minimum keeps the two streams time-aligned without
    /// padding silence into either.
    pub fn align(mut mic: StreamBuffer, mut system: StreamBuffer) -> Self {
        let frames = mic.frames().min(system.frames());
        mic.truncate_frames(frames);
        system.truncate_frames(frames);
        Self { mic, system }
    }

    pub fn frames(&self) -> usize {
        self.mic.frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with_frames(frames: usize, channels: u16) -> StreamBuffer {
        let mut buf = StreamBuffer::new(channels);
        buf.push_block(AudioBlock::new(
            vec![0.25; frames * channels as usize],
            channels,
        ));
        buf
    }

    #[test]
    fn block_frame_count() {
        let block = AudioBlock::new(vec![0.0; 8], 2);
        assert_eq!(block.frames(), 4);
        assert_eq!(block.channels(), 2);
    }

    #[test]
    fn buffer_concatenates_blocks_in_order() {
        let mut buf = StreamBuffer::new(1);
        buf.push_block(AudioBlock::new(vec![1.0, 2.0], 1));
        buf.push_block(AudioBlock::new(vec![3.0], 1));

        assert_eq!(buf.frames(), 3);
        assert_eq!(buf.samples(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn truncate_respects_channel_stride() {
        let mut buf = buffer_with_frames(10, 2);
        buf.truncate_frames(4);

        assert_eq!(buf.frames(), 4);
        assert_eq!(buf.samples().len(), 8);
    }

    #[test]
    fn truncate_beyond_length_is_noop() {
        let mut buf = buffer_with_frames(3, 1);
        buf.truncate_frames(100);
        assert_eq!(buf.frames(), 3);
    }

    #[test]
    fn align_cuts_to_shorter_stream() {
        let mic = buffer_with_frames(48_000, 1);
        let system = buffer_with_frames(48_007, 1);

        let pair = AlignedPair::align(mic, system);

        assert_eq!(pair.frames(), 48_000);
        assert_eq!(pair.mic.frames(), pair.system.frames());
    }

    #[test]
    fn align_is_symmetric() {
        let pair = AlignedPair::align(buffer_with_frames(10, 2), buffer_with_frames(7, 2));
        assert_eq!(pair.frames(), 7);

        let pair = AlignedPair::align(buffer_with_frames(7, 2), buffer_with_frames(10, 2));
        assert_eq!(pair.frames(), 7);
    }

    #[test]
    fn align_empty_buffers() {
        let pair = AlignedPair::align(StreamBuffer::new(1), buffer_with_frames(5, 1));
        assert_eq!(pair.frames(), 0);
        assert!(pair.system.samples().is_empty());
    }
}
