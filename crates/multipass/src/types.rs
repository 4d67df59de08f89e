/// AES-128 key length in bytes (the encryption half of the derived digest).
pub const ENCRYPTION_KEY_LENGTH: usize = 16;

/// HMAC key length in bytes (the signature half of the derived digest).
pub const SIGNATURE_KEY_LENGTH: usize = 16;

/// AES block length in bytes.
pub const AES_BLOCK_LENGTH: usize = 16;

/// CBC IV length in bytes (one AES block).
pub const IV_LENGTH: usize = AES_BLOCK_LENGTH;

/// HMAC-SHA256 output length in bytes.
pub const SIGNATURE_LENGTH: usize = 32;

/// Smallest possible decoded token: IV + one padded block + signature.
pub const MIN_TOKEN_LENGTH: usize = IV_LENGTH + AES_BLOCK_LENGTH + SIGNATURE_LENGTH;
