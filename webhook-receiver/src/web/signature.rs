//! UQPay webhook signature verification.
//!
//! UQPay signs webhook requests using HMAC-SHA512. The signed message is the
//! raw request body followed immediately by the `x-wk-timestamp` header value,
//! and the hex digest is sent in `x-wk-signature`.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Verify a UQPay webhook signature.
///
/// # Arguments
///
/// * `payload` - The exact, unmodified request body
/// * `signature` - Hex-encoded HMAC-SHA512 from the `x-wk-signature` header
/// * `timestamp` - The raw `x-wk-timestamp` header bytes, appended verbatim
/// * `secret` - The shared webhook secret
///
/// # Returns
///
/// `true` only if the signature matches. Bad hex, an empty secret and a digest
/// mismatch all return `false` so callers cannot tell them apart.
pub fn verify_uqpay_signature(
    payload: &[u8],
    signature: impl AsRef<[u8]>,
    timestamp: impl AsRef<[u8]>,
    secret: &str,
) -> bool {
    if secret.is_empty() {
        return false;
    }

    // Non-hex bytes, including anything outside ASCII, fail here
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };

    let Ok(mut mac) = HmacSha512::new_from_slice(secret.as_bytes()) else {
        return false;
    };

    mac.update(payload);
    mac.update(timestamp.as_ref());

    // Constant-time comparison via the HMAC library
    mac.verify_slice(&provided).is_ok()
}

/// Compute the lowercase hex signature UQPay would send for a payload.
#[cfg(test)]
pub(crate) fn compute_uqpay_signature(
    payload: &[u8],
    timestamp: impl AsRef<[u8]>,
    secret: &str,
) -> String {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(payload);
    mac.update(timestamp.as_ref());
    hex::encode(mac.finalize().into_bytes())
}
