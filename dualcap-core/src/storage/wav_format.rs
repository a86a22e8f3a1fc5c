//! RIFF/WAVE header generation for 16-bit linear PCM.

/// Size of the standard WAV RIFF header in bytes.
pub const HEADER_LEN: usize = 44;

const BIT_DEPTH: u16 = 16;

/// Build the 44-byte header for a PCM data chunk of `data_len` bytes.
///
/// Format code 1 (PCM), little-endian. Layout:
/// ```text
/// [0-3]    "RIFF"      [4-7]    file size - 8
/// [8-11]   "WAVE"      [12-15]  "fmt "
/// [16-19]  16          [20-21]  1 (PCM)
/// [22-23]  channels    [24-27]  sample rate
/// [28-31]  byte rate   [32-33]  block align
/// [34-35]  16          [36-39]  "data"
/// [40-43]  data_len
/// ```
pub fn pcm16_header(samplerate: u32, channels: u16, data_len: u32) -> [u8; HEADER_LEN] {
    let block_align = channels * BIT_DEPTH / 8;
    let byte_rate = samplerate * block_align as u32;

    let mut header = [0u8; HEADER_LEN];

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&(36 + data_len).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes());
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&samplerate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&BIT_DEPTH.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_len.to_le_bytes());

    header
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
    }

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    #[test]
    fn magic_chunks() {
        let header = pcm16_header(48_000, 1, 0);
        assert_eq!(header.len(), 44);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");
    }

    #[test]
    fn pcm_format_fields() {
        let header = pcm16_header(48_000, 2, 0);
        assert_eq!(u32_at(&header, 16), 16); // fmt chunk size
        assert_eq!(u16_at(&header, 20), 1); // PCM format code
        assert_eq!(u16_at(&header, 34), 16); // bit depth
    }

    #[test]
    fn derived_rates_mono_48k() {
        let header = pcm16_header(48_000, 1, 96_000);

        assert_eq!(u16_at(&header, 22), 1);
        assert_eq!(u32_at(&header, 24), 48_000);
        assert_eq!(u32_at(&header, 28), 96_000); // 48000 * 1 * 2
        assert_eq!(u16_at(&header, 32), 2); // 1 channel * 2 bytes
        assert_eq!(u32_at(&header, 40), 96_000);
        assert_eq!(u32_at(&header, 4), 36 + 96_000);
    }

    #[test]
    fn derived_rates_stereo_44k1() {
        let header = pcm16_header(44_100, 2, 1_000);

        assert_eq!(u32_at(&header, 28), 176_400); // 44100 * 2 * 2
        assert_eq!(u16_at(&header, 32), 4);
    }
}
