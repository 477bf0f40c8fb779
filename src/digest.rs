//! Digest and key-stretching helpers.
//!
//! Thin pass-throughs to the RustCrypto implementations, kept here so
//! that wallet code composes every hash it needs (address hashing,
//! seed derivation, checksums) from one place. Keccak-256 lives in
//! [`crate::keccak`] and is not duplicated here.

use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

/// Default PBKDF2 iteration count for seed derivation.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 2048;

/// Default derived-key length in bytes.
pub const DEFAULT_DERIVED_KEY_LEN: usize = 64;

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice, as used by legacy address checksums.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160 of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// RIPEMD-160 over SHA-256, the HASH160 used for key hashing.
pub fn ripemd160_sha256(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Keyed HMAC over SHA-512.
pub fn hmac_sha512(data: &[u8], key: &[u8]) -> [u8; 64] {
    let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);

    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// Stretches a password into key material with PBKDF2-HMAC-SHA512.
///
/// Returns `None` rather than an error when the underlying primitive
/// reports failure, e.g. for an unrepresentable output length.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_length: usize,
) -> Option<Vec<u8>> {
    let mut derived = vec![0u8; key_length];
    pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut derived).ok()?;
    Some(derived)
}
