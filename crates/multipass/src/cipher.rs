//! AES-128-CBC encryption of the serialized payload.
//!
//! Output layout: [IV:16][ciphertext with PKCS#7 padding]. A fresh random IV
//! is drawn on every call, so identical payloads never produce identical
//! ciphertexts and IV reuse is impossible by construction.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use aes::Aes128;

use crate::error::MultipassError;
use crate::types::{ENCRYPTION_KEY_LENGTH, IV_LENGTH};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;

/// Generate a random 16-byte IV for AES-128-CBC.
pub fn generate_iv() -> Result<[u8; IV_LENGTH], MultipassError> {
    let mut iv = [0u8; IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| MultipassError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// Encrypt plaintext under a fresh random IV.
///
/// Returns IV ‖ ciphertext.
pub fn encrypt(
    plaintext: &[u8],
    key: &[u8; ENCRYPTION_KEY_LENGTH],
) -> Result<Vec<u8>, MultipassError> {
    let iv = generate_iv()?;
    let ciphertext =
        Aes128CbcEnc::new(key.into(), (&iv).into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut result = Vec::with_capacity(IV_LENGTH + ciphertext.len());
    result.extend_from_slice(&iv);
    result.extend_from_slice(&ciphertext);
    Ok(result)
}
