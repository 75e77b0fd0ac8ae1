//! Streaming SHA-256 over the `sha2` compression primitive

use sha2::compress256;
use sha2::digest::generic_array::GenericArray;

const BLOCK_LEN: usize = 64;

/// SHA-256 initialization constants (FIPS 180-4, first 32 bits of the
/// fractional parts of the square roots of the first eight primes).
const H: [u32; 8] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
];

/// Incremental SHA-256 state.
///
/// Accepts input in arbitrary-sized slices via [`absorb`](Self::absorb);
/// partial 64-byte blocks are buffered across calls and compressed as they
/// fill. [`finalize`](Self::finalize) consumes the state, so a digest can
/// only be produced once. The final digest is a pure function of the
/// concatenated input, regardless of chunking.
#[derive(Debug, Clone)]
pub struct Sha256State {
    state: [u32; 8],
    block: [u8; BLOCK_LEN],
    block_len: usize,
    /// Total bytes absorbed. Lengths beyond u64 bytes are out of scope.
    total_len: u64,
}

impl Sha256State {
    /// Create a fresh state with the standard initialization constants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: H,
            block: [0u8; BLOCK_LEN],
            block_len: 0,
            total_len: 0,
        }
    }

    /// Fold a byte slice into the state.
    pub fn absorb(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        // Top up a pending partial block first.
        if self.block_len > 0 {
            let take = (BLOCK_LEN - self.block_len).min(input.len());
            self.block[self.block_len..self.block_len + take].copy_from_slice(&input[..take]);
            self.block_len += take;
            input = &input[take..];

            if self.block_len == BLOCK_LEN {
                Self::compress(&mut self.state, &self.block);
                self.block_len = 0;
            }
        }

        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            let mut buf = [0u8; BLOCK_LEN];
            buf.copy_from_slice(block);
            Self::compress(&mut self.state, &buf);
        }

        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.block_len = rest.len();
    }

    /// Apply the padding rule and return the 32-byte digest.
    ///
    /// Consumes the state: appends `0x80`, zero-pads to the last 8 bytes of
    /// a block, writes the big-endian bit length, and compresses the final
    /// block(s).
    #[must_use]
    pub fn finalize(mut self) -> [u8; 32] {
        let bit_len = self.total_len.wrapping_mul(8);

        self.block[self.block_len] = 0x80;
        self.block_len += 1;

        // Not enough room for the length field in this block.
        if self.block_len > BLOCK_LEN - 8 {
            self.block[self.block_len..].fill(0);
            Self::compress(&mut self.state, &self.block);
            self.block_len = 0;
        }

        self.block[self.block_len..BLOCK_LEN - 8].fill(0);
        self.block[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
        Self::compress(&mut self.state, &self.block);

        let mut digest = [0u8; 32];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }

    fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        compress256(state, std::slice::from_ref(GenericArray::from_slice(block)));
    }
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::new()
    }
}
