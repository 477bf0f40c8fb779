//! Elliptic-curve key and signature operations.
//!
//! This module provides:
//! - `secp`: stateless secp256k1 operations over byte buffers (key
//!   derivation, deterministic ECDSA, recovery, point combination,
//!   scalar tweaking)
//! - `derivation`: the curve selector used by hierarchical key
//!   derivation (secp256k1 or ed25519)
//! - `context`: the shared, immutable secp256k1 context
//!
//! Every operation is a pure transform; the only persistent state is
//! the context, created once and read-only for the life of the
//! process.

pub mod context;
pub mod derivation;
pub mod secp;

pub use derivation::DerivationCurve;
pub use secp::{
    combine_public_keys, is_signature_valid, public_key_from_private_key, recover_public_key,
    sign, sign_recoverable, tweak_add_private_key, SignatureEncoding, COMPACT_SIGNATURE_LEN,
    RECOVERABLE_SIGNATURE_LEN,
};
