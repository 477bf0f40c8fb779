//! # wallet_crypto
//!
//! Low-level cryptographic primitives for blockchain wallets.
//!
//! ## Architecture
//!
//! - `keccak`: streaming Keccak-256 sponge hashing
//! - `curve`: secp256k1 key, signature and point operations, plus the
//!   derivation-curve selector used by hierarchical key derivation
//! - `digest`: SHA-2 / RIPEMD-160 / HMAC / PBKDF2 helpers
//! - `error`: shared error type
//!
//! All operations are synchronous, CPU-bound and free of I/O. A
//! `Keccak256` instance belongs to a single caller; the curve
//! functions share one immutable context and are safe to call from
//! any number of threads.

pub mod curve;
pub mod digest;
pub mod error;
pub mod keccak;

pub use curve::{DerivationCurve, SignatureEncoding};
pub use error::CryptoError;
pub use keccak::{keccak256, Keccak256};
