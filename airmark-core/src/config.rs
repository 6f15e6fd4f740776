/// Configuration for watermark embedding.
#[derive(Debug, Clone)]
pub struct WatermarkConfig {
    /// Sample rate in Hz (e.g. 44100, 48000). Metadata for I/O layers; the
    /// transform itself is rate-agnostic.
    pub sample_rate: u32,
    /// Embedding intensity applied to each carrier coefficient's magnitude.
    /// Higher = more robust but more audible. Intended range: 0.01 to 0.10.
    /// Default: 0.05.
    pub alpha: f32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            alpha: 0.05,
        }
    }
}
