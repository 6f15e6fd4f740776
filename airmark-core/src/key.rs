use md5::Md5;
use sha2::{Digest, Sha256};

/// Key material for payload encryption: a 256-bit AES key and a 128-bit
/// CBC initialization vector.
///
/// The original scheme derives both from fixed passphrases and keeps them as
/// process-wide constants. Here the material is an explicit value threaded
/// through every embed/extract call, so callers decide where keys come from
/// and fixed passphrases only exist at the outermost layer (e.g. CLI
/// defaults kept for compatibility with already-watermarked audio).
#[derive(Clone)]
pub struct KeyMaterial {
    key: [u8; 32],
    iv: [u8; 16],
}

impl KeyMaterial {
    /// Create key material from raw bytes.
    pub fn new(key: [u8; 32], iv: [u8; 16]) -> Self {
        Self { key, iv }
    }

    /// Derive key material from two passphrases: the AES key is the SHA-256
    /// digest of `key_phrase`, the IV is the MD5 digest of `iv_phrase`.
    ///
    /// Deterministic, so embedder and extractor agree given the same
    /// passphrases. The IV is as fixed as the key, which makes the cipher
    /// deterministic per plaintext; that is a documented weakness of the
    /// scheme, not something this layer hides.
    pub fn from_passphrases(key_phrase: &str, iv_phrase: &str) -> Self {
        let key: [u8; 32] = Sha256::digest(key_phrase.as_bytes()).into();
        let iv: [u8; 16] = Md5::digest(iv_phrase.as_bytes()).into();
        Self { key, iv }
    }

    /// The raw 32-byte AES-256 key.
    pub fn aes_key(&self) -> &[u8; 32] {
        &self.key
    }

    /// The raw 16-byte CBC initialization vector.
    pub fn iv(&self) -> &[u8; 16] {
        &self.iv
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}
