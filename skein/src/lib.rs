//! An implementation of the [Skein][1] family of hash functions over the
//! 512-bit Threefish state: Skein-224, Skein-256, Skein-384 and Skein-512
//! (Skein-512-224/256/384/512 in the submission's naming).
//!
//! Messages are absorbed with UBI chaining: every block goes through
//! Threefish-512 keyed by the previous chaining value and tweaked with its
//! position and type. Finalization flags the last message block and runs an
//! output UBI pass, which also allows arbitrary output lengths through
//! [`Skein512Core`].
//!
//! # Usage
//!
//! ```rust
//! use skein::Skein512;
//! use hex_literal::hex;
//!
//! let mut hasher = Skein512::default();
//! hasher.update(b"The quick brown fox ");
//! hasher.update(b"jumps over the lazy dog");
//! let result = hasher.digest();
//!
//! assert_eq!(result[..], hex!("
//!     94c2ae036dba8783d0b3f7d6cc111ff810702f5c77707999be7e1c9486ff238a
//!     7044de734293147359b4ac7e1d09cd247c351d69826b78dcddd951f0ef912713
//! ")[..]);
//!
//! // `digest` resets the hasher, ready for the next message
//! assert_eq!(hasher.buffered_len(), 0);
//! assert_eq!(hasher.to_string(), "Skein-512");
//! ```
//!
//! Every hasher also implements [`digest::Digest`]:
//!
//! ```rust
//! use skein::{Digest, Skein256};
//! use hex_literal::hex;
//!
//! let result = <Skein256 as Digest>::digest(b"");
//! assert_eq!(result[..], hex!("39ccc4554a8b31853b9de7a1fe638a24cce6b35a55f2431009e18780335d2621")[..]);
//! ```
//!
//! [1]: https://www.schneier.com/academic/skein/

#![no_std]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub use digest::{self, Digest};
pub use digest_engine::{self, BlockLength, BlockTransform, DigestEngine, Error};

mod consts;
pub mod threefish;
mod ubi;

use core::{fmt, marker::PhantomData};

use digest::{
    consts::{U28, U32, U48, U64},
    core_api::{AlgorithmName, Block, BlockSizeUser},
    generic_array::{ArrayLength, GenericArray},
    Output, OutputSizeUser,
};
use digest_engine::{bytes::write_u64_le, BufferKind};

use crate::consts::{BLOCK_SIZE, STATE_WORDS, TYPE_CFG, TYPE_MSG};
use crate::ubi::{compress, Tweak};

type Block64 = GenericArray<u8, U64>;

/// Core Skein-512 hasher state with an output of `N` bytes.
#[derive(Clone)]
pub struct Skein512Core<N: ArrayLength<u8> + 'static> {
    chain: [u64; STATE_WORDS],
    iv: [u64; STATE_WORDS],
    _out: PhantomData<N>,
}

impl<N: ArrayLength<u8> + 'static> Skein512Core<N> {
    /// New core loaded with the IV for `N`-byte output.
    pub fn new() -> Self {
        let iv = initial_chain(8 * N::U64);
        Self {
            chain: iv,
            iv,
            _out: PhantomData,
        }
    }
}

impl<N: ArrayLength<u8> + 'static> Default for Skein512Core<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ArrayLength<u8> + 'static> BlockSizeUser for Skein512Core<N> {
    type BlockSize = U64;
}

impl<N: ArrayLength<u8> + 'static> OutputSizeUser for Skein512Core<N> {
    type OutputSize = N;
}

impl<N: ArrayLength<u8> + 'static> BlockTransform for Skein512Core<N> {
    // the final message block must carry the final flag
    const BUFFER_KIND: BufferKind = BufferKind::Lazy;

    #[inline]
    fn reset(&mut self) {
        self.chain = self.iv;
    }

    #[inline]
    fn process_block(&mut self, block: &Block<Self>, block_count: u64) {
        let tweak = Tweak {
            position: (block_count as u128 + 1) * BLOCK_SIZE as u128,
            block_type: TYPE_MSG,
            first: block_count == 0,
            last: false,
        };
        compress(&mut self.chain, convert(block), &tweak);
    }

    fn pad(&mut self, buffer: &mut Block<Self>, pos: usize, block_count: u64, out: &mut Output<Self>) {
        buffer[pos..].iter_mut().for_each(|b| *b = 0);
        let tweak = Tweak {
            position: block_count as u128 * BLOCK_SIZE as u128 + pos as u128,
            block_type: TYPE_MSG,
            first: block_count == 0,
            last: true,
        };
        compress(&mut self.chain, convert(buffer), &tweak);

        for (i, chunk) in out.chunks_mut(BLOCK_SIZE).enumerate() {
            let mut counter = [0u8; BLOCK_SIZE];
            counter[..8].copy_from_slice(&(i as u64).to_le_bytes());
            let mut state = self.chain;
            compress(&mut state, &counter, &Tweak::output());
            write_u64_le(&state, chunk);
        }
    }
}

impl<N: ArrayLength<u8> + 'static> AlgorithmName for Skein512Core<N> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match N::USIZE {
            28 | 32 | 48 | 64 => write!(f, "Skein-{}", 8 * N::USIZE),
            n => write!(f, "Skein-512-{}", 8 * n),
        }
    }
}

impl<N: ArrayLength<u8> + 'static> fmt::Debug for Skein512Core<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Skein512Core { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl<N: ArrayLength<u8> + 'static> Drop for Skein512Core<N> {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.chain);
    }
}

/// Skein-224 hasher state.
pub type Skein224 = DigestEngine<Skein512Core<U28>>;
/// Skein-256 hasher state.
pub type Skein256 = DigestEngine<Skein512Core<U32>>;
/// Skein-384 hasher state.
pub type Skein384 = DigestEngine<Skein512Core<U48>>;
/// Skein-512 hasher state.
pub type Skein512 = DigestEngine<Skein512Core<U64>>;

/// Chaining value after the configuration block for `output_bits`.
fn initial_chain(output_bits: u64) -> [u64; STATE_WORDS] {
    match output_bits {
        224 => consts::IV_224,
        256 => consts::IV_256,
        384 => consts::IV_384,
        512 => consts::IV_512,
        _ => {
            log::debug!("deriving Skein-512 IV for {}-bit output", output_bits);
            config_chain(output_bits)
        }
    }
}

/// Run the configuration UBI for sequential hashing with `output_bits` of
/// output, starting from an all-zero chaining value.
fn config_chain(output_bits: u64) -> [u64; STATE_WORDS] {
    let mut cfg = [0u8; BLOCK_SIZE];
    cfg[..4].copy_from_slice(&consts::SCHEMA_ID.to_le_bytes());
    cfg[4..6].copy_from_slice(&consts::VERSION.to_le_bytes());
    cfg[8..16].copy_from_slice(&output_bits.to_le_bytes());
    // tree parameters (bytes 16..19) stay zero: sequential mode

    let mut chain = [0u64; STATE_WORDS];
    let tweak = Tweak {
        position: 32,
        block_type: TYPE_CFG,
        first: true,
        last: true,
    };
    compress(&mut chain, &cfg, &tweak);
    chain
}

#[inline(always)]
fn convert(block: &Block64) -> &[u8; BLOCK_SIZE] {
    #[allow(unsafe_code)]
    unsafe {
        &*(block.as_ptr() as *const [u8; BLOCK_SIZE])
    }
}
