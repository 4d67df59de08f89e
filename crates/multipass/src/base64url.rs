use base64ct::{Base64Url, Encoding};

/// Base64url encode bytes, padding retained.
///
/// The multipass construction keeps `=` padding so the token decodes with
/// strict base64url decoders on the storefront side.
pub fn base64url_encode(data: &[u8]) -> String {
    Base64Url::encode_string(data)
}

/// Base64url decode a string to bytes.
pub fn base64url_decode(s: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64Url::decode_vec(s)
}
