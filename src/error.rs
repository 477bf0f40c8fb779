//! Shared error type for the crypto primitives.

use thiserror::Error;

/// Errors returned by the curve operations.
///
/// Soft failures (signature recovery, password-based key derivation)
/// are not errors: those functions return `Option` so that callers can
/// distinguish "no cryptographic result" from a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The curve rejected the signing or derivation inputs, e.g. a
    /// private key outside `[1, order-1]` or a malformed message hash.
    #[error("signing failed: the curve rejected the inputs")]
    SignFailed,

    /// The encoded signature does not fit the working buffer.
    #[error("not enough space to serialize the signature")]
    SerializationSpace,

    /// Point addition failed or produced the point at infinity.
    #[error("public key combination failed")]
    PointCombine,

    /// A scalar tweak produced zero or a value outside `[1, order-1]`.
    #[error("tweaked private key is out of range")]
    TweakOutOfRange,
}
