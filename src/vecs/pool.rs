//! Chunk recycling.
//!
//! Pushing and popping across a chunk boundary would otherwise allocate and free a whole
//! chunk buffer every time. A [`ChunkAllocator`] keeps drained chunks around so the next
//! boundary crossing can reuse them.

use super::chunk::Chunk;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Source of fixed-capacity chunks for a [`ChunkedDeque`](crate::ChunkedDeque).
///
/// Implemented by [`ChunkPool`] (owned by a single deque) and [`SharedChunkPool`]
/// (shared between any number of deques, possibly on different threads).
pub trait ChunkAllocator<T> {
    /// Capacity of every chunk handed out by [`acquire`](ChunkAllocator::acquire).
    fn chunk_size(&self) -> usize;

    /// Returns an empty chunk with its live range collapsed at slot `0`.
    fn acquire(&mut self) -> Chunk<T>;

    /// Takes back a chunk whose slots have all been vacated by the caller.
    fn release(&mut self, chunk: Chunk<T>);

    /// Frees chunks kept for reuse. Allocators without a free list do nothing.
    fn trim(&mut self) {}
}

/// Unbounded free list of chunks, owned by one deque.
pub struct ChunkPool<T> {
    chunk_size: usize,
    free: Vec<Chunk<T>>,
    allocated: usize,
}

impl<T> ChunkPool<T> {
    /// Creates an empty pool that hands out chunks of `chunk_size` slots.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            chunk_size,
            free: Vec::new(),
            allocated: 0,
        }
    }

    /// Total number of chunks this pool has ever allocated.
    pub fn chunks_allocated(&self) -> usize {
        self.allocated
    }

    /// Number of chunks currently waiting for reuse.
    pub fn pooled(&self) -> usize {
        self.free.len()
    }

    /// Frees every pooled chunk.
    pub fn shrink_to_fit(&mut self) {
        self.free.clear();
        self.free.shrink_to_fit();
    }
}

impl<T> ChunkAllocator<T> for ChunkPool<T> {
    #[inline(always)]
    fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn acquire(&mut self) -> Chunk<T> {
        match self.free.pop() {
            Some(chunk) => chunk,
            None => {
                self.allocated += 1;
                tracing::trace!(
                    chunk_size = self.chunk_size,
                    allocated = self.allocated,
                    "allocating chunk"
                );
                Chunk::new(self.chunk_size)
            }
        }
    }

    fn release(&mut self, mut chunk: Chunk<T>) {
        debug_assert!(chunk.is_vacant(), "released chunk still holds values");
        if chunk.capacity() != self.chunk_size {
            tracing::debug!(
                capacity = chunk.capacity(),
                expected = self.chunk_size,
                "dropping chunk of foreign size"
            );
            return;
        }
        chunk.s = 0;
        chunk.e = 0;
        self.free.push(chunk);
    }

    fn trim(&mut self) {
        self.shrink_to_fit();
    }
}

impl<T> Clone for ChunkPool<T> {
    /// A clone starts with an empty free list and a fresh allocation counter.
    fn clone(&self) -> Self {
        Self::new(self.chunk_size)
    }
}

impl<T> core::fmt::Debug for ChunkPool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChunkPool")
            .field("chunk_size", &self.chunk_size)
            .field("pooled", &self.free.len())
            .field("allocated", &self.allocated)
            .finish()
    }
}

/// A [`ChunkPool`] behind a mutex, shareable between deques.
///
/// Cloning the handle shares the underlying free list. The lock is only taken inside
/// `acquire` and `release`, so deques sharing a pool still need their own external
/// synchronization for everything else.
pub struct SharedChunkPool<T> {
    chunk_size: usize,
    inner: Arc<Mutex<ChunkPool<T>>>,
}

impl<T> SharedChunkPool<T> {
    /// Creates a new shared pool handing out chunks of `chunk_size` slots.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            inner: Arc::new(Mutex::new(ChunkPool::new(chunk_size))),
        }
    }

    /// Total number of chunks allocated through any handle of this pool.
    pub fn chunks_allocated(&self) -> usize {
        self.lock().chunks_allocated()
    }

    /// Number of chunks currently waiting for reuse.
    pub fn pooled(&self) -> usize {
        self.lock().pooled()
    }

    // A panic while holding the lock cannot leave the free list half-updated.
    fn lock(&self) -> MutexGuard<'_, ChunkPool<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> ChunkAllocator<T> for SharedChunkPool<T> {
    #[inline(always)]
    fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn acquire(&mut self) -> Chunk<T> {
        self.lock().acquire()
    }

    fn release(&mut self, chunk: Chunk<T>) {
        self.lock().release(chunk);
    }

    /// Frees the pooled chunks of every deque sharing this pool.
    fn trim(&mut self) {
        self.lock().shrink_to_fit();
    }
}

impl<T> Clone for SharedChunkPool<T> {
    fn clone(&self) -> Self {
        Self {
            chunk_size: self.chunk_size,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> core::fmt::Debug for SharedChunkPool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedChunkPool")
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}
