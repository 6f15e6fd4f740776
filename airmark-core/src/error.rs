use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid PKCS7 padding: watermark absent or corrupted")]
    InvalidPadding,

    #[error("ciphertext length {0} is not a positive multiple of the 16-byte AES block")]
    InvalidCiphertextLength(usize),

    #[error("payload too long: {got} characters, maximum is {max}")]
    PayloadTooLong { max: usize, got: usize },

    #[error("reconstructed length {got} cannot be fixed to {expected}")]
    TransformLengthMismatch { expected: usize, got: usize },
}

impl Error {
    /// Name of the error kind, for callers that report failures by kind
    /// rather than by message.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidPadding => "InvalidPadding",
            Error::InvalidCiphertextLength(_) => "InvalidCiphertextLength",
            Error::PayloadTooLong { .. } => "PayloadTooLong",
            Error::TransformLengthMismatch { .. } => "TransformLengthMismatch",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
