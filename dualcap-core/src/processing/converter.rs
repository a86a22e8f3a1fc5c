//! Float to 16-bit fixed-point sample conversion.
//!
//! Pure functions: output shape is deterministic from input, no side
//! effects. The sanitize → clamp → scale ordering is load-bearing: scaling
//! an infinity first would overflow, and clamping NaN first would leave it
//! unchanged (NaN comparisons are never true).

/// Fixed-point representation of a sample buffer, same shape as its float
/// source, ready for WAV serialization. Values stay within
/// [-32767, 32767] by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Int16Buffer {
    samples: Vec<i16>,
    channels: u16,
}

impl Int16Buffer {
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }
}

const FULL_SCALE: f32 = i16::MAX as f32;

/// Convert one float sample: NaN and infinities become 0.0, the rest is
/// clamped to [-1.0, 1.0], scaled by 32767 and truncated toward zero.
pub fn sample_to_int16(sample: f32) -> i16 {
    let sanitized = if sample.is_finite() { sample } else { 0.0 };
    (sanitized.clamp(-1.0, 1.0) * FULL_SCALE) as i16
}

/// Reconcile an interleaved buffer's channel layout with the target count.
///
/// Mono target from a multi-channel buffer keeps channel 0 and drops the
/// rest; a mono buffer expanded to N channels duplicates its samples across
/// all N. Matching counts pass through untouched.
pub fn reconcile_channels(samples: &[f32], source_channels: u16, target_channels: u16) -> Vec<f32> {
    if source_channels == target_channels || source_channels == 0 {
        return samples.to_vec();
    }

    let source = source_channels as usize;
    let target = target_channels as usize;
    let frames = samples.len() / source;

    if target == 1 {
        (0..frames).map(|f| samples[f * source]).collect()
    } else {
        // Mono (or channel 0 of a mismatched layout) fanned out to every
        // target channel.
        let mut out = Vec::with_capacity(frames * target);
        for f in 0..frames {
            let s = samples[f * source];
            out.extend(std::iter::repeat(s).take(target));
        }
        out
    }
}

/// Convert an interleaved float buffer to `Int16Buffer` with
/// `target_channels`, sanitizing every sample.
pub fn convert(samples: &[f32], source_channels: u16, target_channels: u16) -> Int16Buffer {
    let reconciled = reconcile_channels(samples, source_channels, target_channels);
    Int16Buffer {
        samples: reconciled.into_iter().map(sample_to_int16).collect(),
        channels: target_channels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_endpoints() {
        assert_eq!(sample_to_int16(1.0), 32_767);
        assert_eq!(sample_to_int16(-1.0), -32_767);
        assert_eq!(sample_to_int16(0.0), 0);
    }

    #[test]
    fn invalid_values_become_zero() {
        assert_eq!(sample_to_int16(f32::NAN), 0);
        assert_eq!(sample_to_int16(f32::INFINITY), 0);
        assert_eq!(sample_to_int16(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(sample_to_int16(2.5), 32_767);
        assert_eq!(sample_to_int16(-100.0), -32_767);
    }

    #[test]
    fn scaling_truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5
        assert_eq!(sample_to_int16(0.5), 16_383);
        assert_eq!(sample_to_int16(-0.5), -16_383);
    }

    #[test]
    fn output_never_reaches_negative_full_range() {
        for &s in &[-1.0, -0.999, f32::NEG_INFINITY, -1e30] {
            assert!(sample_to_int16(s) >= -32_767);
        }
    }

    #[test]
    fn roundtrip_is_stable_within_one_step() {
        for &s in &[0.0f32, 0.25, -0.7, 0.999, -1.0, 1.0] {
            let once = sample_to_int16(s);
            let back = once as f32 / 32_767.0;
            let twice = sample_to_int16(back);
            assert!((once - twice).abs() <= 1, "sample {s}: {once} vs {twice}");
        }
    }

    #[test]
    fn mono_target_keeps_channel_zero() {
        // Stereo frames: (0.1, 0.9), (0.2, 0.8)
        let stereo = [0.1, 0.9, 0.2, 0.8];
        let mono = reconcile_channels(&stereo, 2, 1);
        assert_eq!(mono, vec![0.1, 0.2]);
    }

    #[test]
    fn mono_source_duplicates_across_targets() {
        let mono = [0.5, -0.5];
        let quad = reconcile_channels(&mono, 1, 4);
        assert_eq!(quad, vec![0.5, 0.5, 0.5, 0.5, -0.5, -0.5, -0.5, -0.5]);
    }

    #[test]
    fn matching_channels_pass_through() {
        let stereo = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(reconcile_channels(&stereo, 2, 2), stereo.to_vec());
    }

    #[test]
    fn convert_shape_follows_target() {
        let stereo = [0.0f32, 1.0, f32::NAN, -1.0];
        let buf = convert(&stereo, 2, 1);

        assert_eq!(buf.channels(), 1);
        assert_eq!(buf.frames(), 2);
        assert_eq!(buf.samples(), &[0, 0]); // channel 0 of each frame
    }

    #[test]
    fn convert_sanitizes_every_sample() {
        let dirty = [f32::NAN, f32::INFINITY, 1.0, -2.0];
        let buf = convert(&dirty, 1, 1);
        assert_eq!(buf.samples(), &[0, 0, 32_767, -32_767]);
    }
}
