//! Construction-time configuration for [`ChunkedDeque`](crate::ChunkedDeque).

use core::mem::size_of;

/// Smallest chunk size accepted by [`DequeConfig::chunk_size`]. Smaller requests are
/// ignored in favour of the element-size based default.
pub const MIN_CHUNK_SIZE: usize = 8;

/// Byte budget used to derive the default chunk size from the element size.
const DEFAULT_CHUNK_BYTES: usize = 1024;

/// Lower bound for the derived default chunk size.
const DEFAULT_MIN_CHUNK_LEN: usize = 16;

/// Tuning knobs for a [`ChunkedDeque`](crate::ChunkedDeque).
///
/// ```rust
/// use chunked_deque::{ChunkedDeque, DequeConfig};
///
/// let d: ChunkedDeque<u64> = ChunkedDeque::with_config(DequeConfig::new().chunk_size(32));
/// assert_eq!(d.chunk_size(), 32);
///
/// // Anything below `MIN_CHUNK_SIZE` falls back to the default.
/// let d: ChunkedDeque<u64> = ChunkedDeque::with_config(DequeConfig::new().chunk_size(4));
/// assert_eq!(d.chunk_size(), 128);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DequeConfig {
    chunk_size: Option<usize>,
    directory_len: Option<usize>,
}

impl DequeConfig {
    /// A configuration where every value is derived from the element type.
    pub const fn new() -> Self {
        Self {
            chunk_size: None,
            directory_len: None,
        }
    }

    /// Requests chunks of `n` elements. Ignored if `n < MIN_CHUNK_SIZE`.
    pub const fn chunk_size(mut self, n: usize) -> Self {
        if n >= MIN_CHUNK_SIZE {
            self.chunk_size = Some(n);
        }
        self
    }

    /// Initial number of slots in the chunk directory. Ignored if `n < 2`.
    pub const fn directory_len(mut self, n: usize) -> Self {
        if n >= 2 {
            self.directory_len = Some(n);
        }
        self
    }

    /// The chunk size a deque of `T` built from this configuration will use.
    pub fn resolve_chunk_size<T>(&self) -> usize {
        match self.chunk_size {
            Some(n) => n,
            None => default_chunk_size::<T>(),
        }
    }

    pub(crate) fn resolve_directory_len(&self) -> usize {
        self.directory_len
            .unwrap_or(crate::vecs::directory::DEFAULT_PITCH_LEN)
    }
}

/// Default chunk size for `T`: about one kibibyte of elements, never fewer than 16.
pub fn default_chunk_size<T>() -> usize {
    (DEFAULT_CHUNK_BYTES / size_of::<T>().max(1)).max(DEFAULT_MIN_CHUNK_LEN)
}
