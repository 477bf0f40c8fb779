//! Curve selection for hierarchical key derivation.

use ed25519_dalek::SigningKey;

use super::secp;
use crate::error::CryptoError;

/// The elliptic curve a derivation tree runs on.
///
/// Carries the seed salt used by seed-to-master-key derivation and
/// knows whether the curve supports non-hardened children. The ed25519
/// path is hardened-only: child keys come straight from the HMAC
/// chain, so there is no point or scalar combination to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivationCurve {
    #[default]
    Secp256k1,
    Ed25519,
}

impl DerivationCurve {
    /// Salt string keyed into HMAC-SHA512 when turning a seed into a
    /// master key.
    pub fn seed_salt(&self) -> &'static [u8] {
        match self {
            DerivationCurve::Secp256k1 => b"Bitcoin seed",
            DerivationCurve::Ed25519 => b"ed25519 seed",
        }
    }

    /// Whether non-hardened child derivation (point/tweak addition) is
    /// available on this curve.
    pub fn supports_non_hardened(&self) -> bool {
        match self {
            DerivationCurve::Secp256k1 => true,
            DerivationCurve::Ed25519 => false,
        }
    }

    /// Derives the public key for a private key on this curve.
    ///
    /// secp256k1 keys serialize compressed (33 bytes) or uncompressed
    /// (65 bytes); ed25519 keys are always the 32-byte encoded point,
    /// so `compressed` has no effect there.
    pub fn public_key(
        &self,
        private_key: &[u8],
        compressed: bool,
    ) -> Result<Vec<u8>, CryptoError> {
        match self {
            DerivationCurve::Secp256k1 => {
                secp::public_key_from_private_key(private_key, compressed)
            }
            DerivationCurve::Ed25519 => {
                let seed: [u8; 32] = private_key
                    .try_into()
                    .map_err(|_| CryptoError::SignFailed)?;
                let signing_key = SigningKey::from_bytes(&seed);
                Ok(signing_key.verifying_key().to_bytes().to_vec())
            }
        }
    }

    /// Applies a child offset from the derivation chain to a parent
    /// private key.
    ///
    /// On secp256k1 this is the scalar tweak `(parent + child) mod
    /// order`. On ed25519 every child is hardened and the chain output
    /// already is the child key, so it passes through unchanged.
    pub fn tweak_child_key(
        &self,
        parent_private_key: &[u8],
        child_key: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        match self {
            DerivationCurve::Secp256k1 => {
                let child = secp::tweak_add_private_key(parent_private_key, child_key)?;
                Ok(child.to_vec())
            }
            DerivationCurve::Ed25519 => Ok(child_key.to_vec()),
        }
    }
}
