//! Segmented double-ended queue.
//!
//! # Layout
//! Elements live in fixed-capacity [`Chunk`]s. The chunks are ordered by a
//! directory of handles that reserves unused slots at both ends:
//!
//! ```text
//!   directory:  | -- | -- | c0 | c1 | c2 | -- |
//!                          |    |    |
//!   c0: [ .  .  .  a  b ]  |    |         live range [3, 5)
//!   c1: [ c  d  e  f  g ] -+    |         full
//!   c2: [ h  i  .  .  . ] ------+         live range [0, 2)
//! ```
//!
//! Pushing at either end writes into the boundary chunk, or takes a chunk from the
//! [`ChunkAllocator`] and places its handle in a reserved directory slot. Growth therefore
//! never copies elements, only (occasionally) the handles.
//!
//! Insertion and removal in the middle touch one chunk plus at most one neighbour, so
//! their cost is bounded by the chunk size and the number of chunks rather than by the
//! number of elements. See [`insert`](ChunkedDeque::insert) and
//! [`remove`](ChunkedDeque::remove).
//!
//! # Invariants
//! - every live directory slot holds a non-empty chunk;
//! - a chunk slot holds a value exactly when it lies inside the chunk's live range;
//! - `len` equals the sum of the chunks' live lengths.

mod splice;

use super::chunk::Chunk;
use super::directory::Directory;
use super::pool::{ChunkAllocator, ChunkPool};
use crate::config::DequeConfig;
use crate::error::DequeError;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice;
use std::collections::VecDeque;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` and [`ChunkedDeque<T, A>`] so that code can operate
/// on a deque without knowing which layout backs it.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Inserts an element at `index`, clamped to `len`.
    fn insert(&mut self, index: usize, item: T);
    /// Removes and returns the element at `index`, or `None` if out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
    /// Returns an exclusive reference to the front element, or `None` if empty.
    fn front_mut(&mut self) -> Option<&mut T>;
    /// Returns an exclusive reference to the back element, or `None` if empty.
    fn back_mut(&mut self) -> Option<&mut T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn insert(&mut self, index: usize, item: T) {
        let index = index.min(self.len());
        self.insert(index, item);
    }
    fn remove(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

/// A double-ended queue stored as a sequence of fixed-capacity chunks.
///
/// Pushes and pops at both ends are amortized O(1) and never move existing elements.
/// Index-based access walks the chunk list (O(number of chunks)), and
/// [`insert`](ChunkedDeque::insert)/[`remove`](ChunkedDeque::remove) at arbitrary positions
/// move at most one chunk's worth of elements.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `T` | Element type |
/// | `A` | Chunk source, [`ChunkPool`] by default |
///
/// A deque is a single-owner structure with no internal synchronization.
///
/// ```rust
/// use chunked_deque::ChunkedDeque;
///
/// let mut d = ChunkedDeque::new();
/// d.push_back(2);
/// d.push_back(3);
/// d.push_front(1);
/// d.insert(1, 10);
/// assert_eq!(d.dump(), vec![1, 10, 2, 3]);
/// assert_eq!(d.remove(1), 10);
/// assert_eq!(d.pop_front(), 1);
/// assert_eq!(d.try_pop_back(), Some(3));
/// ```
pub struct ChunkedDeque<T, A: ChunkAllocator<T> = ChunkPool<T>> {
    dir: Directory<T>,
    len: usize,
    chunk_size: usize,
    alloc: A,
}

impl<T> ChunkedDeque<T> {
    /// Creates an empty deque with the default chunk size for `T`.
    pub fn new() -> Self {
        Self::with_config(DequeConfig::new())
    }

    /// Creates an empty deque with chunks of `n` elements.
    ///
    /// Values below [`MIN_CHUNK_SIZE`](crate::MIN_CHUNK_SIZE) are ignored.
    pub fn with_chunk_size(n: usize) -> Self {
        Self::with_config(DequeConfig::new().chunk_size(n))
    }

    /// Creates an empty deque from an explicit configuration.
    pub fn with_config(config: DequeConfig) -> Self {
        let pool = ChunkPool::new(config.resolve_chunk_size::<T>());
        Self::from_parts(pool, config.resolve_directory_len())
    }
}

impl<T, A: ChunkAllocator<T>> ChunkedDeque<T, A> {
    /// Creates an empty deque drawing its chunks from `alloc`.
    ///
    /// The chunk size is the allocator's.
    pub fn with_allocator(alloc: A) -> Self {
        Self::with_allocator_and_config(alloc, DequeConfig::new())
    }

    /// Creates an empty deque drawing its chunks from `alloc`, sized by `config`.
    ///
    /// Only the directory length is taken from `config`; the chunk size is the
    /// allocator's.
    pub fn with_allocator_and_config(alloc: A, config: DequeConfig) -> Self {
        Self::from_parts(alloc, config.resolve_directory_len())
    }

    fn from_parts(alloc: A, directory_len: usize) -> Self {
        let chunk_size = alloc.chunk_size();
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            dir: Directory::with_pitch_len(directory_len),
            len: 0,
            chunk_size,
            alloc,
        }
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity of every chunk.
    #[inline(always)]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks currently holding elements.
    #[inline(always)]
    pub fn chunk_count(&self) -> usize {
        self.dir.len()
    }

    /// The chunk source backing this deque.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Exclusive access to the chunk source backing this deque.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.alloc
    }

    /// Frees the chunks the allocator keeps for reuse. Live chunks are untouched.
    ///
    /// ```rust
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut d: ChunkedDeque<u64> = ChunkedDeque::with_chunk_size(16);
    /// d.extend(0..1_000);
    /// d.drain_many(0);
    /// d.push_back(1);
    /// d.shrink_to_fit();
    /// assert_eq!(d.allocator().pooled(), 0);
    /// assert_eq!(d.len(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.alloc.trim();
    }

    // ─── directory maintenance ───────────────────────────────────────────────

    /// Appends a fresh, empty chunk positioned to grow towards the back.
    fn expand_back(&mut self) {
        let mut chunk = self.alloc.acquire();
        chunk.reposition(0);
        self.dir.push_back(chunk);
    }

    /// Prepends a fresh, empty chunk positioned to grow towards the front.
    fn expand_front(&mut self) {
        let mut chunk = self.alloc.acquire();
        chunk.reposition(self.chunk_size);
        self.dir.push_front(chunk);
    }

    fn shrink_back(&mut self) {
        if let Some(chunk) = self.dir.pop_back() {
            self.alloc.release(chunk);
        }
    }

    fn shrink_front(&mut self) {
        if let Some(chunk) = self.dir.pop_front() {
            self.alloc.release(chunk);
        }
    }

    /// Excises live chunk `j` (already vacated) and hands it back to the allocator.
    fn release_chunk(&mut self, j: usize) {
        if let Some(chunk) = self.dir.remove(j) {
            self.alloc.release(chunk);
        }
    }

    // ─── push / pop ──────────────────────────────────────────────────────────

    /// Appends `value` to the back.
    pub fn push_back(&mut self, value: T) {
        let full = match self.dir.last() {
            Some(chunk) => chunk.e == self.chunk_size,
            None => true,
        };
        if full {
            self.expand_back();
        }
        match self.dir.last_mut() {
            Some(chunk) => chunk.push_back(value),
            None => unreachable!("Logic Error: no back chunk after expand_back"),
        }
        self.len += 1;
    }

    /// Prepends `value` to the front.
    pub fn push_front(&mut self, value: T) {
        let full = match self.dir.first() {
            Some(chunk) => chunk.s == 0,
            None => true,
        };
        if full {
            self.expand_front();
        }
        match self.dir.first_mut() {
            Some(chunk) => chunk.push_front(value),
            None => unreachable!("Logic Error: no front chunk after expand_front"),
        }
        self.len += 1;
    }

    /// Removes and returns the back element, or `None` if the deque is empty.
    pub fn try_pop_back(&mut self) -> Option<T> {
        let chunk = self.dir.last_mut()?;
        let value = chunk.pop_back();
        if chunk.is_empty() {
            self.shrink_back();
        }
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the front element, or `None` if the deque is empty.
    pub fn try_pop_front(&mut self) -> Option<T> {
        let chunk = self.dir.first_mut()?;
        let value = chunk.pop_front();
        if chunk.is_empty() {
            self.shrink_front();
        }
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the back element.
    ///
    /// # Panics
    /// Panics with [`DequeError::Empty`] if the deque is empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        match self.try_pop_back() {
            Some(value) => value,
            None => DequeError::Empty.raise(),
        }
    }

    /// Removes and returns the front element.
    ///
    /// # Panics
    /// Panics with [`DequeError::Empty`] if the deque is empty.
    #[track_caller]
    pub fn pop_front(&mut self) -> T {
        match self.try_pop_front() {
            Some(value) => value,
            None => DequeError::Empty.raise(),
        }
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.dir.first().and_then(Chunk::front)
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.dir.last().and_then(Chunk::back)
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.dir.first_mut().and_then(Chunk::front_mut)
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.dir.last_mut().and_then(Chunk::back_mut)
    }

    // ─── bulk drain ──────────────────────────────────────────────────────────

    /// Removes up to `max` elements from the front and returns them in order.
    /// `max == 0` drains everything.
    pub fn drain_many(&mut self, max: usize) -> Vec<T> {
        self.drain_many_into(max, Vec::new())
    }

    /// Like [`drain_many`](ChunkedDeque::drain_many), but stores the result in `buf` when
    /// its capacity is large enough. Otherwise `buf` is dropped and a vector of exactly
    /// the required capacity is returned.
    ///
    /// Any previous contents of `buf` are discarded.
    ///
    /// ```rust
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut d: ChunkedDeque<i32> = (0..10).collect();
    /// let buf = Vec::with_capacity(4);
    /// let out = d.drain_many_into(3, buf);
    /// assert_eq!(out, vec![0, 1, 2]);
    /// assert_eq!(out.capacity(), 4);
    /// ```
    pub fn drain_many_into(&mut self, max: usize, mut buf: Vec<T>) -> Vec<T> {
        let n = if max == 0 { self.len } else { max.min(self.len) };
        buf.clear();
        if buf.capacity() < n {
            buf = Vec::with_capacity(n);
        }

        let mut remaining = n;
        while remaining > 0 {
            let Some(chunk) = self.dir.first_mut() else {
                unreachable!("Logic Error: ran out of chunks with {} elements left", remaining)
            };
            let count = remaining.min(chunk.len());
            chunk.drain_front_into(count, &mut buf);
            if chunk.is_empty() {
                self.shrink_front();
            }
            remaining -= count;
        }
        self.len -= n;
        buf
    }

    // ─── random access ───────────────────────────────────────────────────────

    #[inline(always)]
    #[track_caller]
    fn check_index(&self, index: usize) {
        if index >= self.len {
            DequeError::OutOfRange {
                index,
                len: self.len,
            }
            .raise();
        }
    }

    /// Translates a valid logical index into `(chunk, offset within its live range)`,
    /// walking from whichever end is closer.
    fn locate(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.len);
        if index < self.len / 2 {
            let mut i = index;
            for (j, chunk) in self.dir.iter().enumerate() {
                let n = chunk.len();
                if i < n {
                    return (j, i);
                }
                i -= n;
            }
        } else {
            // distance from the back, counting the element itself
            let mut rem = self.len - index;
            for j in (0..self.dir.len()).rev() {
                let n = self.dir.get(j).len();
                if rem <= n {
                    return (j, n - rem);
                }
                rem -= n;
            }
        }
        unreachable!("Logic Error: index {} not covered by any chunk", index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics with [`DequeError::OutOfRange`] if `index >= len`.
    #[track_caller]
    pub fn peek(&self, index: usize) -> &T {
        self.check_index(index);
        let (j, i) = self.locate(index);
        self.dir.get(j).get(i)
    }

    /// Returns an exclusive reference to the element at `index`.
    ///
    /// # Panics
    /// Panics with [`DequeError::OutOfRange`] if `index >= len`.
    #[track_caller]
    pub fn peek_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        let (j, i) = self.locate(index);
        self.dir.get_mut(j).get_mut(i)
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics with [`DequeError::OutOfRange`] if `index >= len`.
    #[track_caller]
    pub fn replace(&mut self, index: usize, value: T) -> T {
        mem::replace(self.peek_mut(index), value)
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics with [`DequeError::OutOfRange`] if either index is `>= len`. Nothing is
    /// modified in that case.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (j0, i0) = self.locate(lo);
        let (j1, i1) = self.locate(hi);
        if j0 == j1 {
            let chunk = self.dir.get_mut(j0);
            let s = chunk.s;
            chunk.slots.swap(s + i0, s + i1);
        } else {
            let (c0, c1) = self.dir.pair_mut(j0, j1);
            mem::swap(c0.get_mut(i0), c1.get_mut(i1));
        }
    }

    /// Visits `(index, element)` pairs front to back until `f` returns `false`.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (i, value) in self.iter().enumerate() {
            if !f(i, value) {
                return;
            }
        }
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chunks: self.dir.live().iter(),
            front: (&[]).iter(),
            back: (&[]).iter(),
            remaining: self.len,
        }
    }

    /// Copies every element into a new vector, front to back.
    pub fn dump(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    // ─── clear ───────────────────────────────────────────────────────────────

    /// Drops every element and returns all chunks to the allocator.
    pub fn clear(&mut self) {
        let Self { dir, alloc, len, .. } = self;
        dir.clear(|mut chunk| {
            chunk.scrub();
            alloc.release(chunk);
        });
        *len = 0;
    }

    /// Panics if any structural invariant is violated.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        self.dir.assert_invariants();
        let mut count = 0;
        for chunk in self.dir.iter() {
            assert!(!chunk.is_empty(), "empty chunk left in the directory");
            assert!(chunk.s <= chunk.e && chunk.e <= self.chunk_size);
            assert_eq!(chunk.capacity(), self.chunk_size);
            for (k, slot) in chunk.slots.iter().enumerate() {
                assert_eq!(
                    slot.is_some(),
                    chunk.live_range().contains(&k),
                    "slot {k} outside/inside live range {:?}",
                    chunk.live_range()
                );
            }
            count += chunk.len();
        }
        assert_eq!(count, self.len);
    }
}

impl<T, A: ChunkAllocator<T>> Drop for ChunkedDeque<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

// ─── iterators ───────────────────────────────────────────────────────────────

/// Borrowing iterator over a [`ChunkedDeque`], created by [`ChunkedDeque::iter`].
pub struct Iter<'a, T> {
    chunks: slice::Iter<'a, Option<Chunk<T>>>,
    front: slice::Iter<'a, Option<T>>,
    back: slice::Iter<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(slot) = self.front.next() {
                self.remaining -= 1;
                return slot.as_ref();
            }
            match self.chunks.next() {
                Some(Some(chunk)) => self.front = chunk.live().iter(),
                Some(None) => unreachable!("Logic Error: vacant handle in live directory"),
                None => {
                    let slot = self.back.next()?;
                    self.remaining -= 1;
                    return slot.as_ref();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.back.next_back() {
                self.remaining -= 1;
                return slot.as_ref();
            }
            match self.chunks.next_back() {
                Some(Some(chunk)) => self.back = chunk.live().iter(),
                Some(None) => unreachable!("Logic Error: vacant handle in live directory"),
                None => {
                    let slot = self.front.next_back()?;
                    self.remaining -= 1;
                    return slot.as_ref();
                }
            }
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a [`ChunkedDeque`].
pub struct IntoIter<T, A: ChunkAllocator<T> = ChunkPool<T>> {
    deque: ChunkedDeque<T, A>,
}

impl<T, A: ChunkAllocator<T>> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.try_pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T, A: ChunkAllocator<T>> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.try_pop_back()
    }
}

impl<T, A: ChunkAllocator<T>> ExactSizeIterator for IntoIter<T, A> {}
impl<T, A: ChunkAllocator<T>> FusedIterator for IntoIter<T, A> {}

impl<T, A: ChunkAllocator<T>> IntoIterator for ChunkedDeque<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter { deque: self }
    }
}

impl<'a, T, A: ChunkAllocator<T>> IntoIterator for &'a ChunkedDeque<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ─── trait impls ─────────────────────────────────────────────────────────────

impl<T, A: ChunkAllocator<T>> AnyDeque<T> for ChunkedDeque<T, A> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.try_pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.try_pop_front()
    }
    fn insert(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }
    fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.len {
            Some(self.remove(index))
        } else {
            None
        }
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

impl<T, A: ChunkAllocator<T>> Index<usize> for ChunkedDeque<T, A> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.peek(index)
    }
}

impl<T, A: ChunkAllocator<T>> IndexMut<usize> for ChunkedDeque<T, A> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.peek_mut(index)
    }
}

impl<T: fmt::Debug, A: ChunkAllocator<T>> fmt::Debug for ChunkedDeque<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for ChunkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: ChunkAllocator<T> + Clone> Clone for ChunkedDeque<T, A> {
    fn clone(&self) -> Self {
        let mut deque = Self::from_parts(self.alloc.clone(), self.dir.pitch_len());
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T, A, B> PartialEq<ChunkedDeque<T, B>> for ChunkedDeque<T, A>
where
    T: PartialEq,
    A: ChunkAllocator<T>,
    B: ChunkAllocator<T>,
{
    fn eq(&self, other: &ChunkedDeque<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: ChunkAllocator<T>> Eq for ChunkedDeque<T, A> {}

impl<T, A: ChunkAllocator<T>> Extend<T> for ChunkedDeque<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for ChunkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
