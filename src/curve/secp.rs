//! Stateless secp256k1 operations over byte buffers.
//!
//! Key material is exchanged in the fixed wire layouts used by wallet
//! code: 32-byte big-endian private keys, 33-byte compressed or
//! 65-byte uncompressed public keys, and 64-byte `r || s` compact
//! signatures (plus one trailing recovery-id byte for the recoverable
//! form). Signing is deterministic per RFC 6979 and every signature is
//! normalized to the canonical low-S form before serialization.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Scalar, SecretKey};

use super::context::secp;
use crate::error::CryptoError;

/// Length of a compact `r || s` signature.
pub const COMPACT_SIGNATURE_LEN: usize = 64;

/// Length of a recoverable signature: compact form plus recovery id.
pub const RECOVERABLE_SIGNATURE_LEN: usize = 65;

/// Working-buffer bound for variable-length signature encodings.
const MAX_ENCODED_SIGNATURE_LEN: usize = 128;

/// Output encoding for [`sign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureEncoding {
    /// Fixed 64 bytes: `r || s`, big-endian.
    Compact,
    /// ASN.1 DER, truncated to its actual length.
    #[default]
    Der,
}

/// Derives the public key `private_key * G` and serializes it.
///
/// Fails with [`CryptoError::SignFailed`] if the private key is not a
/// valid scalar in `[1, order-1]`.
pub fn public_key_from_private_key(
    private_key: &[u8],
    compressed: bool,
) -> Result<Vec<u8>, CryptoError> {
    let secret = SecretKey::from_slice(private_key).map_err(|_| CryptoError::SignFailed)?;
    let point = PublicKey::from_secret_key(secp(), &secret);
    Ok(serialize_point(&point, compressed))
}

/// Signs a 32-byte message hash with deterministic ECDSA.
///
/// The nonce is derived from the key and message per RFC 6979, and the
/// signature is normalized to low-S before encoding. Fails with
/// [`CryptoError::SignFailed`] if the hash or key is rejected, and
/// with [`CryptoError::SerializationSpace`] if the encoded signature
/// exceeds the working buffer.
pub fn sign(
    message_hash: &[u8],
    private_key: &[u8],
    encoding: SignatureEncoding,
) -> Result<Vec<u8>, CryptoError> {
    let message = Message::from_digest_slice(message_hash).map_err(|_| CryptoError::SignFailed)?;
    let secret = SecretKey::from_slice(private_key).map_err(|_| CryptoError::SignFailed)?;

    let mut signature = secp().sign_ecdsa(&message, &secret);
    signature.normalize_s();

    match encoding {
        SignatureEncoding::Compact => Ok(signature.serialize_compact().to_vec()),
        SignatureEncoding::Der => {
            let der = signature.serialize_der();
            if der.len() > MAX_ENCODED_SIGNATURE_LEN {
                return Err(CryptoError::SerializationSpace);
            }
            Ok(der.to_vec())
        }
    }
}

/// Signs a 32-byte message hash, producing a recoverable signature.
///
/// Layout: 64-byte compact `r || s` followed by one recovery-id byte.
/// The public key can be recovered from the result with
/// [`recover_public_key`].
pub fn sign_recoverable(
    message_hash: &[u8],
    private_key: &[u8],
) -> Result<[u8; RECOVERABLE_SIGNATURE_LEN], CryptoError> {
    let message = Message::from_digest_slice(message_hash).map_err(|_| CryptoError::SignFailed)?;
    let secret = SecretKey::from_slice(private_key).map_err(|_| CryptoError::SignFailed)?;

    let (recovery_id, compact) = secp()
        .sign_ecdsa_recoverable(&message, &secret)
        .serialize_compact();

    let mut out = [0u8; RECOVERABLE_SIGNATURE_LEN];
    out[..COMPACT_SIGNATURE_LEN].copy_from_slice(&compact);
    out[COMPACT_SIGNATURE_LEN] = recovery_id.to_i32() as u8;
    Ok(out)
}

/// Recovers the public key that produced a recoverable signature.
///
/// Returns `None` rather than an error when the signature is
/// malformed or recovery mathematically fails; a well-formed signature
/// over a different message simply recovers a different key.
pub fn recover_public_key(
    signature: &[u8],
    message_hash: &[u8],
    compressed: bool,
) -> Option<Vec<u8>> {
    if signature.len() != RECOVERABLE_SIGNATURE_LEN {
        return None;
    }

    let message = Message::from_digest_slice(message_hash).ok()?;
    let recovery_id = RecoveryId::from_i32(i32::from(signature[COMPACT_SIGNATURE_LEN])).ok()?;
    let recoverable =
        RecoverableSignature::from_compact(&signature[..COMPACT_SIGNATURE_LEN], recovery_id)
            .ok()?;

    let point = secp().recover_ecdsa(&message, &recoverable).ok()?;
    Some(serialize_point(&point, compressed))
}

/// Checks a recoverable signature against an expected public key.
///
/// Verification is recovery-based: the key is recovered from the
/// signature and compared byte-for-byte, so `public_key` must be in
/// the serialization form selected by `compressed`.
pub fn is_signature_valid(
    signature: &[u8],
    message_hash: &[u8],
    public_key: &[u8],
    compressed: bool,
) -> bool {
    match recover_public_key(signature, message_hash, compressed) {
        Some(recovered) => recovered == public_key,
        None => false,
    }
}

/// Adds two public-key points, `a + b`.
///
/// Used to apply a non-hardened child offset to a parent public key.
/// Accepts either serialization form for each input and returns the
/// compressed form. Fails with [`CryptoError::PointCombine`] if an
/// input does not decode or the sum is the point at infinity.
pub fn combine_public_keys(a: &[u8], b: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let a = PublicKey::from_slice(a).map_err(|_| CryptoError::PointCombine)?;
    let b = PublicKey::from_slice(b).map_err(|_| CryptoError::PointCombine)?;

    let combined = a.combine(&b).map_err(|_| CryptoError::PointCombine)?;
    Ok(combined.serialize().to_vec())
}

/// Computes `(parent_private_key + child_offset) mod order`.
///
/// Fails with [`CryptoError::TweakOutOfRange`] if either scalar is
/// invalid or the sum is zero, which would produce an unusable key.
pub fn tweak_add_private_key(
    parent_private_key: &[u8],
    child_offset: &[u8],
) -> Result<[u8; 32], CryptoError> {
    let parent =
        SecretKey::from_slice(parent_private_key).map_err(|_| CryptoError::TweakOutOfRange)?;
    let offset: [u8; 32] = child_offset
        .try_into()
        .map_err(|_| CryptoError::TweakOutOfRange)?;
    let tweak = Scalar::from_be_bytes(offset).map_err(|_| CryptoError::TweakOutOfRange)?;

    let child = parent
        .add_tweak(&tweak)
        .map_err(|_| CryptoError::TweakOutOfRange)?;
    Ok(child.secret_bytes())
}

fn serialize_point(point: &PublicKey, compressed: bool) -> Vec<u8> {
    if compressed {
        point.serialize().to_vec()
    } else {
        point.serialize_uncompressed().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keccak::keccak256;

    /// secp256k1 group order, big-endian.
    const ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    /// Half the group order: the low-S bound.
    const HALF_ORDER: &str = "7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0";

    fn key(n: u8) -> [u8; 32] {
        let mut k = [0u8; 32];
        k[31] = n;
        k
    }

    #[test]
    fn public_key_of_one_is_the_generator() {
        let compressed = public_key_from_private_key(&key(1), true).unwrap();
        assert_eq!(
            hex::encode(&compressed),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );

        let uncompressed = public_key_from_private_key(&key(1), false).unwrap();
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(uncompressed[0], 0x04);
        // Same X coordinate in both forms.
        assert_eq!(uncompressed[1..33], compressed[1..33]);
    }

    #[test]
    fn invalid_private_keys_are_rejected() {
        assert_eq!(
            public_key_from_private_key(&key(0), true),
            Err(CryptoError::SignFailed)
        );

        let order: [u8; 32] = hex::decode(ORDER).unwrap().try_into().unwrap();
        assert_eq!(
            public_key_from_private_key(&order, true),
            Err(CryptoError::SignFailed)
        );

        assert_eq!(
            public_key_from_private_key(&[0x01; 16], true),
            Err(CryptoError::SignFailed)
        );
    }

    #[test]
    fn compact_signature_layout() {
        let hash = keccak256(b"transaction payload");
        let signature = sign(&hash, &key(7), SignatureEncoding::Compact).unwrap();
        assert_eq!(signature.len(), COMPACT_SIGNATURE_LEN);

        // Deterministic nonce: identical inputs, identical signature.
        let again = sign(&hash, &key(7), SignatureEncoding::Compact).unwrap();
        assert_eq!(signature, again);
    }

    #[test]
    fn der_signature_layout() {
        let hash = keccak256(b"transaction payload");
        let signature = sign(&hash, &key(7), SignatureEncoding::Der).unwrap();

        assert_eq!(signature[0], 0x30);
        assert!(signature.len() <= 72);
        assert_eq!(usize::from(signature[1]), signature.len() - 2);
    }

    #[test]
    fn signatures_are_low_s() {
        let half_order = hex::decode(HALF_ORDER).unwrap();
        for n in 1..=20u8 {
            let hash = keccak256(&[n]);
            let signature = sign(&hash, &key(n), SignatureEncoding::Compact).unwrap();
            // Big-endian byte comparison matches numeric comparison.
            assert!(
                signature[32..] <= half_order[..],
                "high s for key {n}"
            );
        }
    }

    #[test]
    fn sign_rejects_bad_inputs() {
        let hash = keccak256(b"x");
        assert_eq!(
            sign(&hash, &key(0), SignatureEncoding::Compact),
            Err(CryptoError::SignFailed)
        );
        assert_eq!(
            sign(&hash[..31], &key(1), SignatureEncoding::Compact),
            Err(CryptoError::SignFailed)
        );
    }

    #[test]
    fn recover_roundtrip() {
        let hash = keccak256(b"message to sign");
        let signature = sign_recoverable(&hash, &key(42)).unwrap();
        assert_eq!(signature.len(), RECOVERABLE_SIGNATURE_LEN);

        for compressed in [true, false] {
            let recovered = recover_public_key(&signature, &hash, compressed).unwrap();
            let expected = public_key_from_private_key(&key(42), compressed).unwrap();
            assert_eq!(recovered, expected);
        }
    }

    #[test]
    fn recovery_soft_fails_on_malformed_signatures() {
        let hash = keccak256(b"message");

        // Wrong length.
        assert_eq!(recover_public_key(&[0u8; 64], &hash, true), None);
        // Recovery id out of range.
        let mut signature = sign_recoverable(&hash, &key(3)).unwrap();
        signature[64] = 9;
        assert_eq!(recover_public_key(&signature, &hash, true), None);
        // r and s both zero never recover.
        assert_eq!(recover_public_key(&[0u8; 65], &hash, true), None);
    }

    #[test]
    fn recovery_based_verification() {
        let hash = keccak256(b"payload");
        let signature = sign_recoverable(&hash, &key(5)).unwrap();

        let ours = public_key_from_private_key(&key(5), true).unwrap();
        let theirs = public_key_from_private_key(&key(6), true).unwrap();

        assert!(is_signature_valid(&signature, &hash, &ours, true));
        assert!(!is_signature_valid(&signature, &hash, &theirs, true));

        let other_hash = keccak256(b"different payload");
        assert!(!is_signature_valid(&signature, &other_hash, &ours, true));
    }

    #[test]
    fn combine_is_commutative() {
        let a = public_key_from_private_key(&key(11), true).unwrap();
        let b = public_key_from_private_key(&key(13), false).unwrap();

        let ab = combine_public_keys(&a, &b).unwrap();
        let ba = combine_public_keys(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 33);
    }

    #[test]
    fn combine_of_opposite_points_fails() {
        // pub(k) and pub(order - k) are negations of each other, so
        // their sum is the point at infinity.
        let order_minus_one: [u8; 32] =
            hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140")
                .unwrap()
                .try_into()
                .unwrap();

        let p = public_key_from_private_key(&key(1), true).unwrap();
        let q = public_key_from_private_key(&order_minus_one, true).unwrap();
        assert_eq!(combine_public_keys(&p, &q), Err(CryptoError::PointCombine));
    }

    #[test]
    fn combine_rejects_garbage() {
        let p = public_key_from_private_key(&key(1), true).unwrap();
        assert_eq!(
            combine_public_keys(&p, &[0u8; 33]),
            Err(CryptoError::PointCombine)
        );
    }

    #[test]
    fn tweak_add_matches_scalar_arithmetic() {
        let child = tweak_add_private_key(&key(1), &key(1)).unwrap();
        assert_eq!(child, key(2));

        // Non-hardened derivation consistency:
        // pub(parent + offset) == pub(parent) + pub(offset).
        let left = public_key_from_private_key(&child, true).unwrap();
        let parent_pub = public_key_from_private_key(&key(1), true).unwrap();
        let offset_pub = public_key_from_private_key(&key(1), true).unwrap();
        let right = combine_public_keys(&parent_pub, &offset_pub).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn tweak_to_zero_fails() {
        let order_minus_one: [u8; 32] =
            hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140")
                .unwrap()
                .try_into()
                .unwrap();

        // 1 + (order - 1) == 0 mod order.
        assert_eq!(
            tweak_add_private_key(&key(1), &order_minus_one),
            Err(CryptoError::TweakOutOfRange)
        );
    }

    #[test]
    fn tweak_rejects_invalid_scalars() {
        let order: [u8; 32] = hex::decode(ORDER).unwrap().try_into().unwrap();
        assert_eq!(
            tweak_add_private_key(&key(1), &order),
            Err(CryptoError::TweakOutOfRange)
        );
        assert_eq!(
            tweak_add_private_key(&key(0), &key(1)),
            Err(CryptoError::TweakOutOfRange)
        );
        assert_eq!(
            tweak_add_private_key(&key(1), &[0x01; 8]),
            Err(CryptoError::TweakOutOfRange)
        );
    }
}
