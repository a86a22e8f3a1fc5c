//! Additive mix-down of the two aligned streams.

use crate::capture::block::AlignedPair;

/// Sum two equal-length aligned sample buffers element-wise, clamping each
/// sum to [-1.0, 1.0]. A naive mix, not loudness-normalized.
pub fn mix_samples(a: &[f32], b: &[f32]) -> Vec<f32> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| (x + y).clamp(-1.0, 1.0)).collect()
}

/// Mix the two members of an aligned pair into one float buffer of the same
/// shape.
pub fn mix_pair(pair: &AlignedPair) -> Vec<f32> {
    mix_samples(pair.mic.samples(), pair.system.samples())
}
