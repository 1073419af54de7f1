use core::fmt;

use digest::{
    core_api::{AlgorithmName, Block, BlockSizeUser},
    typenum::Unsigned,
    FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::{bytes, BlockLength, Error};

/// When a full block buffer is handed to the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferKind {
    /// Process the buffer as soon as it fills.
    Eager,
    /// Hold a full buffer back until more input arrives, so that padding sees
    /// the last block of the message. Needed by transforms that flag the
    /// final block (e.g. Skein's UBI).
    Lazy,
}

/// Compression function plugged into a [`DigestEngine`].
///
/// The engine owns the input buffer and the block counter; the transform owns
/// the chaining state.
pub trait BlockTransform: BlockSizeUser + OutputSizeUser + AlgorithmName + Clone {
    /// Buffering policy for full blocks.
    const BUFFER_KIND: BufferKind = BufferKind::Eager;

    /// Reload the initial chaining value.
    fn reset(&mut self);

    /// Absorb one full block. `block_count` is the number of blocks processed
    /// before this one.
    fn process_block(&mut self, block: &Block<Self>, block_count: u64);

    /// Finish the computation and write the natural-length digest to `out`.
    ///
    /// `buffer[..pos]` holds the unprocessed tail of the message; the rest of
    /// `buffer` is scratch. For lazy transforms `pos` may equal the block size.
    fn pad(&mut self, buffer: &mut Block<Self>, pos: usize, block_count: u64, out: &mut Output<Self>);

    /// Block length advertised to key-padding consumers such as HMAC.
    fn block_length() -> BlockLength {
        BlockLength::Fixed(Self::BlockSize::USIZE)
    }
}

/// Streaming digest over a [`BlockTransform`].
///
/// The digest only depends on the concatenation of all input, not on how it
/// was split across `update` calls. Finalizing resets the engine, so it can be
/// reused straight away.
///
/// ```
/// # use digest_engine::{DigestEngine, BlockTransform};
/// fn digest_twice<T: BlockTransform>(mut engine: DigestEngine<T>, msg: &[u8]) {
///     engine.update(msg);
///     let first = engine.digest();
///     engine.update(msg);
///     assert_eq!(first, engine.digest());
/// }
/// ```
#[derive(Clone)]
pub struct DigestEngine<T: BlockTransform> {
    core: T,
    buffer: Block<T>,
    pos: usize,
    block_count: u64,
}

impl<T: BlockTransform> DigestEngine<T> {
    /// Wrap `core`, which must be in its initial state.
    pub fn from_core(core: T) -> Self {
        Self {
            core,
            buffer: Default::default(),
            pos: 0,
            block_count: 0,
        }
    }

    /// Absorb a single byte.
    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        let bs = T::BlockSize::USIZE;
        match T::BUFFER_KIND {
            BufferKind::Eager => {
                self.buffer[self.pos] = byte;
                self.pos += 1;
                if self.pos == bs {
                    self.flush_buffer();
                }
            }
            BufferKind::Lazy => {
                if self.pos == bs {
                    self.flush_buffer();
                }
                self.buffer[self.pos] = byte;
                self.pos += 1;
            }
        }
    }

    /// Absorb `data`.
    #[inline]
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.absorb(data.as_ref());
    }

    /// Absorb `data[offset..offset + len]`.
    ///
    /// The engine is left untouched if the range does not fit in `data`.
    pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), Error> {
        let range = bytes::checked_range(data.len(), offset, len)?;
        self.absorb(&data[range]);
        Ok(())
    }

    /// Finalize and return the natural-length digest, then reset.
    pub fn digest(&mut self) -> Output<T> {
        let mut out = Output::<T>::default();
        self.finalize_reset_into(&mut out);
        out
    }

    /// Finalize into `buf[offset..]`, writing at most `len` bytes, then reset.
    ///
    /// When `len` is shorter than [`digest_length`](Self::digest_length) the
    /// leading `len` bytes of the digest are written. Returns the number of
    /// bytes written. If the destination range does not fit, the pending
    /// computation is left intact and an error is returned.
    pub fn digest_into(&mut self, buf: &mut [u8], offset: usize, len: usize) -> Result<usize, Error> {
        let dl = T::OutputSize::USIZE;
        if len >= dl {
            let range = bytes::checked_range(buf.len(), offset, dl)?;
            self.finalize_reset_into(Output::<T>::from_mut_slice(&mut buf[range]));
            Ok(dl)
        } else {
            let range = bytes::checked_range(buf.len(), offset, len)?;
            let mut scratch = Output::<T>::default();
            self.finalize_reset_into(&mut scratch);
            buf[range].copy_from_slice(&scratch[..len]);
            Ok(len)
        }
    }

    /// Discard buffered input and return to the initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.reinit();
    }

    /// Independent copy of the current state, buffered input included.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Natural digest length in bytes.
    #[inline]
    pub fn digest_length(&self) -> usize {
        T::OutputSize::USIZE
    }

    /// Block length advertised by the transform.
    #[inline]
    pub fn block_length(&self) -> BlockLength {
        T::block_length()
    }

    /// Number of bytes waiting in the block buffer.
    #[inline]
    pub fn buffered_len(&self) -> usize {
        self.pos
    }

    /// Number of blocks handed to the transform since the last reset.
    #[inline]
    pub fn block_count(&self) -> u64 {
        self.block_count
    }

    fn absorb(&mut self, mut data: &[u8]) {
        let bs = T::BlockSize::USIZE;
        match T::BUFFER_KIND {
            BufferKind::Eager => {
                if self.pos != 0 {
                    let n = core::cmp::min(bs - self.pos, data.len());
                    self.buffer[self.pos..self.pos + n].copy_from_slice(&data[..n]);
                    self.pos += n;
                    data = &data[n..];
                    if self.pos < bs {
                        return;
                    }
                    self.flush_buffer();
                }
                let mut blocks = data.chunks_exact(bs);
                for block in &mut blocks {
                    self.process(Block::<T>::from_slice(block));
                }
                let tail = blocks.remainder();
                self.buffer[..tail.len()].copy_from_slice(tail);
                self.pos = tail.len();
            }
            BufferKind::Lazy => {
                if data.is_empty() {
                    return;
                }
                if self.pos != 0 {
                    let n = core::cmp::min(bs - self.pos, data.len());
                    self.buffer[self.pos..self.pos + n].copy_from_slice(&data[..n]);
                    self.pos += n;
                    data = &data[n..];
                    if data.is_empty() {
                        return;
                    }
                    self.flush_buffer();
                }
                // keep at least one byte back so the last block reaches `pad`
                while data.len() > bs {
                    let (block, rest) = data.split_at(bs);
                    self.process(Block::<T>::from_slice(block));
                    data = rest;
                }
                self.buffer[..data.len()].copy_from_slice(data);
                self.pos = data.len();
            }
        }
    }

    #[inline(always)]
    fn process(&mut self, block: &Block<T>) {
        self.core.process_block(block, self.block_count);
        self.block_count = self.block_count.wrapping_add(1);
    }

    #[inline(always)]
    fn flush_buffer(&mut self) {
        self.core.process_block(&self.buffer, self.block_count);
        self.block_count = self.block_count.wrapping_add(1);
        self.pos = 0;
    }

    fn finalize_reset_into(&mut self, out: &mut Output<T>) {
        log::trace!(
            "{}: finalizing after {} blocks and {} buffered bytes",
            AlgName::<T>::new(),
            self.block_count,
            self.pos
        );
        self.core.pad(&mut self.buffer, self.pos, self.block_count, out);
        self.reinit();
    }

    fn reinit(&mut self) {
        self.core.reset();
        self.pos = 0;
        self.block_count = 0;
        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(self.buffer.as_mut_slice());
    }
}

impl<T: BlockTransform + Default> Default for DigestEngine<T> {
    #[inline]
    fn default() -> Self {
        Self::from_core(T::default())
    }
}

impl<T: BlockTransform> BlockSizeUser for DigestEngine<T> {
    type BlockSize = T::BlockSize;
}

impl<T: BlockTransform> OutputSizeUser for DigestEngine<T> {
    type OutputSize = T::OutputSize;
}

impl<T: BlockTransform> Update for DigestEngine<T> {
    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.absorb(data);
    }
}

impl<T: BlockTransform> FixedOutput for DigestEngine<T> {
    #[inline]
    fn finalize_into(mut self, out: &mut Output<Self>) {
        self.finalize_reset_into(out);
    }
}

impl<T: BlockTransform> FixedOutputReset for DigestEngine<T> {
    #[inline]
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        self.finalize_reset_into(out);
    }
}

impl<T: BlockTransform> Reset for DigestEngine<T> {
    #[inline]
    fn reset(&mut self) {
        self.reinit();
    }
}

impl<T: BlockTransform> HashMarker for DigestEngine<T> {}

impl<T: BlockTransform> fmt::Display for DigestEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::write_alg_name(f)
    }
}

impl<T: BlockTransform> fmt::Debug for DigestEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::write_alg_name(f)?;
        f.write_str(" { ... }")
    }
}

#[cfg(feature = "std")]
impl<T: BlockTransform> std::io::Write for DigestEngine<T> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl<T: BlockTransform> Drop for DigestEngine<T> {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(self.buffer.as_mut_slice());
        self.pos = 0;
    }
}

/// Formats the algorithm name of `T` without an instance.
struct AlgName<T>(core::marker::PhantomData<T>);

impl<T> AlgName<T> {
    fn new() -> Self {
        AlgName(core::marker::PhantomData)
    }
}

impl<T: AlgorithmName> fmt::Display for AlgName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::write_alg_name(f)
    }
}
