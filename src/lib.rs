//! # Chunked Deque
//!
//! A double-ended queue that stores its elements in fixed-size chunks instead of one
//! contiguous ring buffer.
//!
//! `ChunkedDeque` supports amortized constant-time pushes and pops at both ends, indexed
//! access, and insertion or removal at any position whose cost is bounded by the chunk size
//! rather than by the length of the deque.
//!
//! ## Key Features
//!
//! * **No bulk copies on growth:** Pushing past the end of a chunk takes a new chunk from
//!   the allocator; existing elements never move.
//! * **Cheap middle edits:** `insert` and `remove` shift at most one chunk's worth of
//!   elements, splitting or merging chunks as they fill up or drain.
//! * **Chunk recycling:** Drained chunks go back to a `ChunkAllocator`. `ChunkPool` keeps
//!   them per deque; `SharedChunkPool` lets many deques (and threads) share one free list.
//! * **Interoperability:** `ChunkedDeque` and `std::collections::VecDeque` both implement
//!   the `AnyDeque` trait.
//!
//! ## Chunk Size
//!
//! By default a chunk holds about one kibibyte of elements and never fewer than 16
//! (`default_chunk_size`). `DequeConfig::chunk_size` overrides this; requests below
//! `MIN_CHUNK_SIZE` are ignored.
//!
//! ## Examples
//!
//! ### Queue and stack operations
//!
//! ```rust
//! use chunked_deque::ChunkedDeque;
//!
//! let mut d: ChunkedDeque<i32> = ChunkedDeque::new();
//! d.push_back(1);
//! d.push_back(2);
//! d.push_front(0);
//!
//! assert_eq!(d.len(), 3);
//! assert_eq!(d.pop_front(), 0);
//! assert_eq!(d.pop_back(), 2);
//! assert_eq!(d.try_pop_back(), Some(1));
//! assert_eq!(d.try_pop_back(), None);
//! ```
//!
//! ### Random access and splicing
//!
//! ```rust
//! use chunked_deque::{ChunkedDeque, DequeConfig};
//!
//! let mut d: ChunkedDeque<u32> = ChunkedDeque::with_config(DequeConfig::new().chunk_size(8));
//! d.extend(0..20);
//!
//! d.insert(10, 100);
//! assert_eq!(*d.peek(10), 100);
//! assert_eq!(d.remove(11), 10);
//! assert_eq!(d[12], 12);
//!
//! d.swap(0, 19);
//! assert_eq!(d.iter().take(3).collect::<Vec<_>>(), vec![&19, &1, &2]);
//! ```
//!
//! ### Sharing chunks between deques
//!
//! ```rust
//! use chunked_deque::{ChunkedDeque, SharedChunkPool};
//!
//! let pool = SharedChunkPool::new(16);
//! let mut a = ChunkedDeque::with_allocator(pool.clone());
//! let mut b = ChunkedDeque::with_allocator(pool.clone());
//!
//! a.extend(0..64);
//! a.clear();
//! // `b` reuses the chunks `a` handed back.
//! b.extend(0..64);
//! assert_eq!(pool.chunks_allocated(), 4);
//! ```

// --- Module Declarations ---

mod config;
mod error;
pub mod vecs;

// --- Re-exports ---

pub use config::{default_chunk_size, DequeConfig, MIN_CHUNK_SIZE};
pub use error::DequeError;
pub use vecs::chunk::Chunk;
pub use vecs::deque::{AnyDeque, ChunkedDeque, IntoIter, Iter};
pub use vecs::pool::{ChunkAllocator, ChunkPool, SharedChunkPool};
