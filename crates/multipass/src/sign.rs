//! HMAC-SHA256 signing of the ciphertext.
//!
//! The MAC covers the full IV ‖ ciphertext, so tampering with either the IV
//! or the encrypted body invalidates the token.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::MultipassError;
use crate::types::{SIGNATURE_KEY_LENGTH, SIGNATURE_LENGTH};

type HmacSha256 = Hmac<Sha256>;

/// Sign data with HMAC-SHA256 under the signature key.
pub fn sign(
    data: &[u8],
    key: &[u8; SIGNATURE_KEY_LENGTH],
) -> Result<[u8; SIGNATURE_LENGTH], MultipassError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| MultipassError::SigningFailed(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; SIGNATURE_KEY_LENGTH] = [0x17; SIGNATURE_KEY_LENGTH];

    #[test]
    fn deterministic() {
        let a = sign(b"ciphertext", &KEY).unwrap();
        let b = sign(b"ciphertext", &KEY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_data_different_signature() {
        let a = sign(b"ciphertext-a", &KEY).unwrap();
        let b = sign(b"ciphertext-b", &KEY).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn different_key_different_signature() {
        let other = [0x18; SIGNATURE_KEY_LENGTH];
        let a = sign(b"ciphertext", &KEY).unwrap();
        let b = sign(b"ciphertext", &other).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn known_answer() {
        // HMAC-SHA256 with an all-zero 16-byte key over the empty message
        let signature = sign(b"", &[0u8; SIGNATURE_KEY_LENGTH]).unwrap();
        assert_eq!(signature.len(), SIGNATURE_LENGTH);
        assert_eq!(
            hex::encode(signature),
            "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
        );
    }
}
