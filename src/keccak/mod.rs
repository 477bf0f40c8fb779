//! Streaming Keccak-256 hashing.
//!
//! This module provides:
//! - `Keccak256`: an incremental sponge engine (absorb any number of
//!   byte slices, then take a 32-byte digest)
//! - `keccak256`: a one-shot convenience over the same engine
//!
//! This is the original Keccak as used by Ethereum (0x01 padding), not
//! the FIPS 202 SHA3-256 variant (0x06 padding). Parameters are fixed:
//! rate 136 bytes, capacity 64 bytes, digest 32 bytes.

mod engine;
mod permutation;

pub use engine::{keccak256, Keccak256, DIGEST_LEN, RATE};
