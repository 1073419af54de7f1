use core::fmt;

/// Error returned by the bounds-checked entry points of the engine.
///
/// Every variant signals a misuse by the caller (a buffer or range that does
/// not fit) and is never clamped or recovered from internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A copy would read or write past the end of a buffer.
    BufferTooSmall {
        /// Number of bytes the request needs the buffer to hold.
        required: usize,
        /// Actual length of the buffer.
        available: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "buffer too small: {} bytes required, {} available",
                required, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
