//! Shopify multipass token generation.
//!
//! A multipass token is a single-use login credential handed from a trusted
//! backend to a storefront. The customer payload is encrypted and signed with
//! keys derived from a shared secret, then URL-safe base64 encoded:
//!
//! `base64url( IV:16 ‖ AES-128-CBC(payload JSON) ‖ HMAC-SHA256:32 )`
//!
//! See <https://shopify.dev/docs/api/multipass> for the construction.
//!
//! The library is a pure per-call transformation: no logging, no environment
//! access, no shared state. Concurrent callers are independent.

pub mod base64url;
pub mod cipher;
pub mod error;
pub mod keys;
pub mod payload;
pub mod sign;
pub mod token;
pub mod types;

pub use base64url::{base64url_decode, base64url_encode};
pub use cipher::{encrypt, generate_iv};
pub use error::MultipassError;
pub use keys::{derive_keys, DerivedKeys};
pub use payload::CustomerData;
pub use sign::sign;
pub use token::{generate_token, TokenGenerator};
pub use types::{
    AES_BLOCK_LENGTH, ENCRYPTION_KEY_LENGTH, IV_LENGTH, MIN_TOKEN_LENGTH, SIGNATURE_KEY_LENGTH,
    SIGNATURE_LENGTH,
};
