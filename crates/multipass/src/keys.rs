//! Key derivation from the shared multipass secret.
//!
//! Both keys come from a single SHA-256 digest of the secret:
//! bytes 0-15 encrypt, bytes 16-31 sign. The storefront derives the same
//! pair from the same secret, so derivation must stay byte-exact.

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::{ENCRYPTION_KEY_LENGTH, SIGNATURE_KEY_LENGTH};

/// Encryption and signature keys derived from the shared secret.
///
/// Ephemeral key material, zeroed on drop. Recomputed per generator; never
/// persisted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    /// AES-128-CBC key (digest bytes 0-15).
    pub encryption_key: [u8; ENCRYPTION_KEY_LENGTH],
    /// HMAC-SHA256 key (digest bytes 16-31).
    pub signature_key: [u8; SIGNATURE_KEY_LENGTH],
}

/// Derive the key pair from the shared secret.
///
/// Deterministic: the same secret always yields the same pair.
pub fn derive_keys(secret: &str) -> DerivedKeys {
    let digest = Sha256::digest(secret.as_bytes());

    let mut encryption_key = [0u8; ENCRYPTION_KEY_LENGTH];
    let mut signature_key = [0u8; SIGNATURE_KEY_LENGTH];
    encryption_key.copy_from_slice(&digest[..ENCRYPTION_KEY_LENGTH]);
    signature_key.copy_from_slice(&digest[ENCRYPTION_KEY_LENGTH..]);

    DerivedKeys {
        encryption_key,
        signature_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = derive_keys("test-secret-key");
        let b = derive_keys("test-secret-key");
        assert_eq!(a.encryption_key, b.encryption_key);
        assert_eq!(a.signature_key, b.signature_key);
    }

    #[test]
    fn different_secrets_different_keys() {
        let a = derive_keys("secret-a");
        let b = derive_keys("secret-b");
        assert_ne!(a.encryption_key, b.encryption_key);
        assert_ne!(a.signature_key, b.signature_key);
    }

    #[test]
    fn splits_sha256_digest() {
        // SHA-256("test-secret-key"), first and second halves
        let keys = derive_keys("test-secret-key");
        assert_eq!(
            hex::encode(keys.encryption_key),
            "2ceac6f36363c6246a64cca805cd43ca"
        );
        assert_eq!(
            hex::encode(keys.signature_key),
            "7a01b14eb2fcc532ceec3f60f2f7df1c"
        );
    }

    #[test]
    fn halves_differ() {
        let keys = derive_keys("test-secret-key");
        assert_ne!(keys.encryption_key, keys.signature_key);
    }

    #[test]
    fn empty_secret_still_derives() {
        let keys = derive_keys("");
        assert_ne!(keys.encryption_key, [0u8; ENCRYPTION_KEY_LENGTH]);
        assert_ne!(keys.signature_key, [0u8; SIGNATURE_KEY_LENGTH]);
    }
}
