use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

use crate::error::{Error, Result};
use crate::key::KeyMaterial;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Encrypt a payload with AES-256-CBC after PKCS7 padding.
///
/// Total for any input length, including empty: an empty payload still pads
/// to one full block. Output length is `(plaintext.len() / 16 + 1) * 16`.
pub fn encrypt(key: &KeyMaterial, plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(key.aes_key().into(), key.iv().into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt an AES-256-CBC ciphertext and strip PKCS7 padding.
///
/// The padding check is the watermark presence signal: sign-noise extracted
/// from unwatermarked audio almost never unpads cleanly.
pub fn decrypt(key: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength(ciphertext.len()));
    }
    Aes256CbcDec::new(key.aes_key().into(), key.iv().into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::InvalidPadding)
}
