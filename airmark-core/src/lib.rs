pub mod cipher;
pub mod config;
pub mod dwt;
pub mod embed;
pub mod error;
pub mod extract;
pub mod key;
pub mod payload;
pub mod perturb;

// Re-export primary API types
pub use config::WatermarkConfig;
pub use error::Error;
pub use key::KeyMaterial;
pub use perturb::{BitExtractor, SignExtractor};

/// Embed a text watermark into audio samples.
///
/// Returns a new sample buffer of the same length and rate as the input,
/// ready for writing to an uncompressed PCM container.
pub fn embed(
    samples: &[f32],
    text: &str,
    key: &KeyMaterial,
    config: &WatermarkConfig,
) -> error::Result<Vec<f32>> {
    embed::embed(samples, text, key, config)
}

/// Extract a text watermark from audio samples.
///
/// `Err(Error::InvalidPadding)` means the watermark is absent or corrupted;
/// other errors are internal failures reported by kind.
pub fn extract(samples: &[f32], key: &KeyMaterial) -> error::Result<String> {
    extract::extract(samples, key)
}

/// Extract a text watermark using a caller-supplied bit extractor.
pub fn extract_with(
    samples: &[f32],
    extractor: &dyn BitExtractor,
    key: &KeyMaterial,
) -> error::Result<String> {
    extract::extract_with(samples, extractor, key)
}
