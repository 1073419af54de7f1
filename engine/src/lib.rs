//! Streaming digest engine shared by block-oriented hash functions.
//!
//! An algorithm supplies its compression function as a [`BlockTransform`]:
//! block and output sizes, the initial chaining value, a full-block step and
//! the finalization. [`DigestEngine`] does the rest: buffering of partial
//! blocks, byte-at-a-time and bulk input, block counting, truncated output,
//! cloning and resetting.
//!
//! Every engine implements the traits of the [`digest`] crate, so it can be
//! used anywhere a [`Digest`](digest::Digest) is expected.
//!
//! # Usage
//!
//! ```rust
//! use core::fmt;
//! use digest_engine::{BlockTransform, DigestEngine};
//! use digest_engine::digest::{
//!     consts::{U4, U8},
//!     core_api::{AlgorithmName, Block, BlockSizeUser},
//!     Output, OutputSizeUser,
//! };
//!
//! /// Toy transform: XOR of all blocks.
//! #[derive(Clone, Default)]
//! struct Xor8([u8; 8]);
//!
//! impl BlockSizeUser for Xor8 {
//!     type BlockSize = U8;
//! }
//!
//! impl OutputSizeUser for Xor8 {
//!     type OutputSize = U4;
//! }
//!
//! impl AlgorithmName for Xor8 {
//!     fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("Xor8")
//!     }
//! }
//!
//! impl BlockTransform for Xor8 {
//!     fn reset(&mut self) {
//!         self.0 = [0; 8];
//!     }
//!
//!     fn process_block(&mut self, block: &Block<Self>, _: u64) {
//!         self.0.iter_mut().zip(block.iter()).for_each(|(a, b)| *a ^= b);
//!     }
//!
//!     fn pad(&mut self, buffer: &mut Block<Self>, pos: usize, _: u64, out: &mut Output<Self>) {
//!         buffer[pos..].iter_mut().for_each(|b| *b = 0);
//!         self.process_block(buffer, 0);
//!         out.copy_from_slice(&self.0[..4]);
//!     }
//! }
//!
//! let mut engine = DigestEngine::from_core(Xor8::default());
//! engine.update(b"0123456789");
//! assert_eq!(engine.digest()[..], [b'0' ^ b'8', b'1' ^ b'9', b'2', b'3']);
//! assert_eq!(engine.to_string(), "Xor8");
//! ```

#![no_std]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub use digest;

mod block_length;
pub mod bytes;
mod engine;
mod error;

pub use crate::block_length::BlockLength;
pub use crate::engine::{BlockTransform, BufferKind, DigestEngine};
pub use crate::error::Error;
