use crate::cipher;
use crate::config::WatermarkConfig;
use crate::dwt;
use crate::error::{Error, Result};
use crate::key::KeyMaterial;
use crate::payload;
use crate::perturb;

/// Maximum payload size in characters.
pub const MAX_TEXT_CHARS: usize = 100;

/// Embed a text watermark into audio samples.
///
/// The payload is AES-encrypted, unpacked into bits, and written into the
/// detail band of a one-level Haar decomposition; the signal is then
/// reconstructed and normalized to the input's exact length. Returns a new
/// sample buffer of the same length as the input.
///
/// Every stage is deterministic given its inputs; the first failing stage
/// aborts the pipeline.
pub fn embed(
    samples: &[f32],
    text: &str,
    key: &KeyMaterial,
    config: &WatermarkConfig,
) -> Result<Vec<f32>> {
    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        return Err(Error::PayloadTooLong {
            max: MAX_TEXT_CHARS,
            got: chars,
        });
    }

    let ciphertext = cipher::encrypt(key, text.as_bytes());
    let bits = payload::unpack_bits(&ciphertext);

    let (ca, cd) = dwt::forward(samples);
    let cd_marked = perturb::embed_bits(&cd, &bits, config.alpha);
    let reconstructed = dwt::inverse(&ca, &cd_marked)?;

    dwt::fix_length(reconstructed, samples.len())
}
