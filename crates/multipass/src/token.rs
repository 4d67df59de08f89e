//! Token assembly: the full generation pipeline.
//!
//! validate → derive keys → payload JSON with `created_at` → AES-128-CBC
//! encrypt under a fresh IV → HMAC-SHA256 over IV ‖ ciphertext → base64url.
//!
//! Either a complete token is returned or a typed error; a partial token
//! never escapes.

use chrono::Utc;

use crate::base64url::base64url_encode;
use crate::cipher::encrypt;
use crate::error::MultipassError;
use crate::keys::{derive_keys, DerivedKeys};
use crate::payload::CustomerData;
use crate::sign::sign;

/// Reusable token generator with keys derived once from the shared secret.
///
/// Each `generate` call draws its own IV and buffers, so a single generator
/// is safe to share across threads.
pub struct TokenGenerator {
    keys: DerivedKeys,
}

impl TokenGenerator {
    /// Derive the key pair from the shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            keys: derive_keys(secret),
        }
    }

    /// Generate a single-use login token for the customer.
    pub fn generate(&self, customer_data: &CustomerData) -> Result<String, MultipassError> {
        customer_data.validate()?;

        let payload = customer_data.payload_json(Utc::now())?;
        let mut token = encrypt(payload.as_bytes(), &self.keys.encryption_key)?;
        let signature = sign(&token, &self.keys.signature_key)?;
        token.extend_from_slice(&signature);

        Ok(base64url_encode(&token))
    }
}

/// One-shot token generation from a secret and customer payload.
pub fn generate_token(secret: &str, customer_data: &CustomerData) -> Result<String, MultipassError> {
    TokenGenerator::new(secret).generate(customer_data)
}
