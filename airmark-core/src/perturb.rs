//! Coefficient-level bit embedding and extraction.
//!
//! Bits are written into the detail band by forcing each coefficient's sign
//! to the bit's polarity while keeping (and slightly inflating) its
//! magnitude. Extraction is a bare sign threshold with no error correction:
//! a coefficient whose sign flips in transit flips its bit. The extractor
//! sits behind [`BitExtractor`] so a sturdier scheme (e.g. repetition coding
//! with majority vote) can replace it without touching the pipelines.

/// Maximum number of bits the extractor will ever read back, independent of
/// how many were embedded. 1024 bits = 128 bytes = 8 AES blocks.
pub const CAPACITY_BITS: usize = 1024;

/// Embed a bit sequence into a detail-coefficient array.
///
/// Returns a new array; the input is left untouched so pre- and
/// post-embedding coefficients can be compared side by side. For each index
/// `i` below `min(bits.len(), cd.len())` the coefficient becomes
/// `±(|cd[i]| + alpha * |cd[i]|)`, positive for a 1 bit and negative for a
/// 0 bit; the bit sequence wraps cyclically if shorter than that range.
/// Remaining coefficients are copied unchanged.
///
/// A zero coefficient stays zero whatever the bit: that position cannot
/// carry data and reads back as 0.
pub fn embed_bits(cd: &[f32], bits: &[bool], alpha: f32) -> Vec<f32> {
    let mut out = cd.to_vec();
    if bits.is_empty() {
        return out;
    }

    let span = bits.len().min(out.len());
    for (i, c) in out.iter_mut().enumerate().take(span) {
        let magnitude = c.abs() + alpha * c.abs();
        *c = if bits[i % bits.len()] {
            magnitude
        } else {
            -magnitude
        };
    }
    out
}

/// Recovers bit estimates from a detail-coefficient array.
pub trait BitExtractor {
    /// Read back at most [`CAPACITY_BITS`] bit estimates from `cd`.
    fn extract_bits(&self, cd: &[f32]) -> Vec<bool>;
}

/// Threshold-only extractor: a strictly positive coefficient reads as 1,
/// anything else (including exact zero) as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignExtractor;

impl BitExtractor for SignExtractor {
    fn extract_bits(&self, cd: &[f32]) -> Vec<bool> {
        cd.iter().take(CAPACITY_BITS).map(|&c| c > 0.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_polarity_forced() {
        let cd = [0.4f32, -0.3, 0.2, -0.1, 0.5, -0.6];
        let bits = [true, true, false, false, true, false];
        let marked = embed_bits(&cd, &bits, 0.05);

        for (i, (&c, &bit)) in marked.iter().zip(bits.iter()).enumerate() {
            if bit {
                assert!(c > 0.0, "coefficient {i} should be positive, got {c}");
            } else {
                assert!(c < 0.0, "coefficient {i} should be negative, got {c}");
            }
        }
    }

    #[test]
    fn magnitude_scaled_by_alpha() {
        let cd = [-0.3f32];
        let marked = embed_bits(&cd, &[true], 0.05);
        assert!((marked[0] - 0.3 * 1.05).abs() < 1e-6);
    }

    #[test]
    fn zero_coefficient_is_a_no_op() {
        let marked = embed_bits(&[0.0f32, 0.0], &[true, false], 0.05);
        assert_eq!(marked, vec![0.0, 0.0]);
        // And reads back as 0 regardless of the embedded bit.
        assert_eq!(SignExtractor.extract_bits(&marked), vec![false, false]);
    }

    #[test]
    fn coefficients_beyond_bits_unchanged() {
        let cd = [0.1f32, -0.2, 0.3, -0.4];
        let marked = embed_bits(&cd, &[false, true], 0.05);
        assert_eq!(marked[2], cd[2]);
        assert_eq!(marked[3], cd[3]);
    }

    #[test]
    fn empty_bits_copies_input() {
        let cd = [0.1f32, -0.2];
        assert_eq!(embed_bits(&cd, &[], 0.05), cd.to_vec());
    }

    #[test]
    fn input_array_not_mutated() {
        let cd = vec![0.5f32, -0.5];
        let _ = embed_bits(&cd, &[false, false], 0.05);
        assert_eq!(cd, vec![0.5, -0.5]);
    }

    #[test]
    fn embed_extract_agree() {
        let cd: Vec<f32> = (0..300)
            .map(|i| 0.05 + 0.01 * (i % 7) as f32)
            .map(|c| if c as usize % 2 == 0 { c } else { -c })
            .collect();
        let bits: Vec<bool> = (0..300).map(|i| (i * 5 + 1) % 3 == 0).collect();

        let marked = embed_bits(&cd, &bits, 0.05);
        let recovered = SignExtractor.extract_bits(&marked);
        assert_eq!(recovered, bits);
    }

    #[test]
    fn extractor_caps_at_capacity() {
        let cd = vec![1.0f32; CAPACITY_BITS * 3];
        assert_eq!(SignExtractor.extract_bits(&cd).len(), CAPACITY_BITS);

        let short = vec![1.0f32; 77];
        assert_eq!(SignExtractor.extract_bits(&short).len(), 77);
    }
}
