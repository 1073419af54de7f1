use core::num::NonZeroUsize;

/// Block length advertised by a digest.
///
/// HMAC pads keys to the block length of the underlying digest. Most
/// algorithms have a native block size; some only define a unit from which
/// the key block size is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockLength {
    /// Native block size in bytes.
    Fixed(usize),
    /// Key block size is the key length rounded up to a multiple of this
    /// unit (in bytes), and never less than one unit.
    Derived(NonZeroUsize),
}

impl BlockLength {
    /// Size in bytes that an HMAC key of `key_len` bytes is padded to.
    ///
    /// Saturates at `usize::MAX` for keys within one unit of it.
    pub fn key_block_size(self, key_len: usize) -> usize {
        match self {
            BlockLength::Fixed(n) => n,
            BlockLength::Derived(n) => {
                let n = n.get();
                let units = key_len / n + (key_len % n != 0) as usize;
                n.saturating_mul(units.max(1))
            }
        }
    }

    /// Native or unit size in bytes.
    pub fn unit(self) -> usize {
        match self {
            BlockLength::Fixed(n) => n,
            BlockLength::Derived(n) => n.get(),
        }
    }
}
