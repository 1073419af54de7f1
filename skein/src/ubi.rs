use digest_engine::bytes::read_u64_le;

use crate::consts::{BLOCK_SIZE, STATE_WORDS, TYPE_OUT};
use crate::threefish;

const FIRST: u64 = 1 << 62;
const FINAL: u64 = 1 << 63;

/// Per-block UBI tweak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Tweak {
    /// Bytes processed so far, this block included (96 bits are significant).
    pub(crate) position: u128,
    pub(crate) block_type: u64,
    pub(crate) first: bool,
    pub(crate) last: bool,
}

impl Tweak {
    pub(crate) fn words(&self) -> [u64; 2] {
        let mut t1 = ((self.position >> 64) as u64 & 0xFFFF_FFFF) | (self.block_type << 56);
        if self.first {
            t1 |= FIRST;
        }
        if self.last {
            t1 |= FINAL;
        }
        [self.position as u64, t1]
    }

    /// Tweak of an output block: a single 8-byte counter.
    pub(crate) fn output() -> Self {
        Tweak {
            position: 8,
            block_type: TYPE_OUT,
            first: true,
            last: true,
        }
    }
}

/// One UBI step: encrypt the block keyed by the chaining value and feed the
/// block forward into the result.
#[inline]
pub(crate) fn compress(chain: &mut [u64; STATE_WORDS], block: &[u8; BLOCK_SIZE], tweak: &Tweak) {
    let mut m = [0u64; STATE_WORDS];
    read_u64_le(block, &mut m);

    let mut x = m;
    threefish::encrypt_block(chain, &tweak.words(), &mut x);
    for ((c, x), m) in chain.iter_mut().zip(x.iter()).zip(m.iter()) {
        *c = x ^ m;
    }
}
