use crate::cipher::{self, BLOCK_SIZE};
use crate::dwt;
use crate::error::{Error, Result};
use crate::key::KeyMaterial;
use crate::payload;
use crate::perturb::{BitExtractor, SignExtractor};

/// Extract and decrypt a text watermark from audio samples using the
/// default sign-threshold extractor.
pub fn extract(samples: &[f32], key: &KeyMaterial) -> Result<String> {
    extract_with(samples, &SignExtractor, key)
}

/// Extract a text watermark using a caller-supplied bit extractor.
///
/// The detail band is read back as bit estimates, truncated to whole bytes,
/// and trial-decrypted. On success the recovered text is returned with
/// invalid UTF-8 sequences dropped and surrounding whitespace trimmed.
/// `Error::InvalidPadding` means no genuine watermark was found.
pub fn extract_with(
    samples: &[f32],
    extractor: &dyn BitExtractor,
    key: &KeyMaterial,
) -> Result<String> {
    let (_ca, cd) = dwt::forward(samples);

    let mut bits = extractor.extract_bits(&cd);
    bits.truncate(bits.len() - bits.len() % 8);
    let bytes = payload::pack_bits(&bits);

    let plaintext = trial_decrypt(key, &bytes)?;
    Ok(decode_text(&plaintext))
}

/// Decrypt the extracted byte buffer without knowing the payload length.
///
/// The extractor always reads back the full capacity, so bytes past the real
/// ciphertext are sign-noise from untouched coefficients and the buffer as a
/// whole never ends in valid padding. A CBC prefix is itself a well-formed
/// ciphertext, so candidate prefixes are tried shortest-first (at most
/// capacity / block size = 8 attempts) and the first clean unpad wins. For
/// a genuine watermark that is exactly the embedded ciphertext's own
/// padding block.
fn trial_decrypt(key: &KeyMaterial, buf: &[u8]) -> Result<Vec<u8>> {
    if buf.len() < BLOCK_SIZE {
        return Err(Error::InvalidCiphertextLength(buf.len()));
    }

    let num_blocks = buf.len() / BLOCK_SIZE;
    for blocks in 1..=num_blocks {
        if let Ok(plaintext) = cipher::decrypt(key, &buf[..blocks * BLOCK_SIZE]) {
            return Ok(plaintext);
        }
    }
    Err(Error::InvalidPadding)
}

/// Decode recovered plaintext bytes, dropping invalid UTF-8 sequences and
/// trimming surrounding whitespace.
fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect::<String>()
        .trim()
        .to_string()
}
