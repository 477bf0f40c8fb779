//! Process-wide secp256k1 context.

use lazy_static::lazy_static;
use secp256k1::{All, Secp256k1};

lazy_static! {
    /// The shared signing/verification context.
    ///
    /// Built on first use and never torn down. The context is
    /// read-only after construction, so concurrent use from any number
    /// of threads needs no locking.
    static ref SECP256K1: Secp256k1<All> = Secp256k1::new();
}

/// Returns the shared curve context.
pub fn secp() -> &'static Secp256k1<All> {
    &SECP256K1
}
