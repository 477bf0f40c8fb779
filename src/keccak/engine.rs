//! Incremental Keccak-256 engine.

use super::permutation::keccak_f;

/// Sponge rate for Keccak-256: bytes absorbed per permutation.
pub const RATE: usize = 136;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Words of the state touched while absorbing one block.
const RATE_WORDS: usize = RATE / 8;

/// A streaming Keccak-256 hash.
///
/// Bytes are fed in with [`absorb`](Self::absorb); a digest is taken
/// with [`finalize`](Self::finalize). Finalizing pads and permutes a
/// copy of the state, so it never disturbs the stream: it can be
/// called repeatedly with identical results, and more data may be
/// absorbed afterwards.
#[derive(Debug, Clone, Default)]
pub struct Keccak256 {
    /// 5x5 lane matrix, lane index = x + 5*y.
    state: [u64; 25],
    /// Unprocessed input, always shorter than [`RATE`].
    buffer: Vec<u8>,
}

impl Keccak256 {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds bytes into the sponge.
    ///
    /// Every full 136-byte block is absorbed immediately; a remainder
    /// below the rate stays buffered for the next call.
    pub fn absorb(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);

        let full = self.buffer.len() - self.buffer.len() % RATE;
        if full == 0 {
            return;
        }

        for block in self.buffer[..full].chunks_exact(RATE) {
            absorb_block(&mut self.state, block);
        }
        self.buffer.drain(..full);
    }

    /// Returns the 32-byte digest of everything absorbed so far.
    ///
    /// Works on a copy of the state: the live stream is untouched.
    pub fn finalize(&self) -> [u8; DIGEST_LEN] {
        let mut state = self.state;

        // pad10*1: the buffered remainder always fits one padded block,
        // since the buffer never reaches the rate. With 135 bytes
        // buffered both marks land in the same final byte.
        let mut block = [0u8; RATE];
        block[..self.buffer.len()].copy_from_slice(&self.buffer);
        block[self.buffer.len()] |= 0x01;
        block[RATE - 1] |= 0x80;
        absorb_block(&mut state, &block);

        let mut digest = [0u8; DIGEST_LEN];
        for (chunk, lane) in digest.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        digest
    }
}

/// One-shot Keccak-256.
///
/// Equivalent to feeding `data` through a fresh engine in any number
/// of `absorb` calls and finalizing.
pub fn keccak256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut engine = Keccak256::new();
    engine.absorb(data);
    engine.finalize()
}

/// XORs one rate-sized block into the state and permutes.
fn absorb_block(state: &mut [u64; 25], block: &[u8]) {
    debug_assert_eq!(block.len(), RATE);

    for (lane, word) in state[..RATE_WORDS].iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= u64::from_le_bytes(word.try_into().unwrap());
    }
    keccak_f(state);
}
