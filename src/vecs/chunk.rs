//! Fixed-capacity element buffer used as the unit of storage by
//! [`ChunkedDeque`](crate::ChunkedDeque).
//!
//! A chunk owns `capacity` slots and tracks a live range `[s, e)`. Every slot inside the
//! live range holds a value; every slot outside of it is vacant (`None`). Vacating a slot
//! always drops or moves the value out, so a removed element never keeps resources alive
//! through the chunk.

use core::fmt;
use core::ops::Range;

/// A fixed-capacity buffer holding a contiguous live sub-range of elements.
///
/// Chunks are normally created by a [`ChunkAllocator`](crate::ChunkAllocator) and are handed
/// back to it once drained.
pub struct Chunk<T> {
    pub(crate) s: usize,
    pub(crate) e: usize,
    pub(crate) slots: Box<[Option<T>]>,
}

impl<T> Chunk<T> {
    /// Allocates a vacant chunk with room for `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            s: 0,
            e: 0,
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Number of slots in this chunk.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.e - self.s
    }

    /// Returns `true` if the live range is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.s == self.e
    }

    /// Returns `true` if no slot holds a value.
    pub fn is_vacant(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The live range `[s, e)` in slot coordinates.
    #[inline(always)]
    pub fn live_range(&self) -> Range<usize> {
        self.s..self.e
    }

    /// Collapses the live range to an empty range positioned at `at`.
    #[inline(always)]
    pub(crate) fn reposition(&mut self, at: usize) {
        debug_assert!(self.is_empty());
        self.s = at;
        self.e = at;
    }

    /// The live slots, front to back.
    #[inline(always)]
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.slots[self.s..self.e]
    }

    /// Shared reference to the element at `offset` within the live range.
    #[inline(always)]
    pub(crate) fn get(&self, offset: usize) -> &T {
        match &self.slots[self.s + offset] {
            Some(v) => v,
            None => unreachable!("Logic Error: live slot {} is vacant", self.s + offset),
        }
    }

    /// Exclusive reference to the element at `offset` within the live range.
    #[inline(always)]
    pub(crate) fn get_mut(&mut self, offset: usize) -> &mut T {
        let pos = self.s + offset;
        match &mut self.slots[pos] {
            Some(v) => v,
            None => unreachable!("Logic Error: live slot {} is vacant", pos),
        }
    }

    pub(crate) fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(0))
        }
    }

    pub(crate) fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(self.len() - 1))
        }
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            Some(self.get_mut(0))
        }
    }

    pub(crate) fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            let last = self.len() - 1;
            Some(self.get_mut(last))
        }
    }

    /// Moves the value out of the slot at absolute position `pos`, leaving it vacant.
    #[inline(always)]
    pub(crate) fn take(&mut self, pos: usize) -> T {
        match self.slots[pos].take() {
            Some(v) => v,
            None => unreachable!("Logic Error: took from vacant slot {}", pos),
        }
    }

    /// Stores `value` into the vacant slot at absolute position `pos`.
    #[inline(always)]
    pub(crate) fn put(&mut self, pos: usize, value: T) {
        debug_assert!(self.slots[pos].is_none(), "overwriting live slot {pos}");
        self.slots[pos] = Some(value);
    }

    /// Appends at `e`. The caller guarantees `e < capacity`.
    #[inline(always)]
    pub(crate) fn push_back(&mut self, value: T) {
        let pos = self.e;
        self.put(pos, value);
        self.e += 1;
    }

    /// Prepends at `s - 1`. The caller guarantees `s > 0`.
    #[inline(always)]
    pub(crate) fn push_front(&mut self, value: T) {
        self.s -= 1;
        let pos = self.s;
        self.put(pos, value);
    }

    /// Removes the last live element. The caller guarantees the chunk is not empty.
    #[inline(always)]
    pub(crate) fn pop_back(&mut self) -> T {
        self.e -= 1;
        self.take(self.e)
    }

    /// Removes the first live element. The caller guarantees the chunk is not empty.
    #[inline(always)]
    pub(crate) fn pop_front(&mut self) -> T {
        let v = self.take(self.s);
        self.s += 1;
        v
    }

    /// Moves the first `count` live elements into `out`, advancing `s`.
    pub(crate) fn drain_front_into(&mut self, count: usize, out: &mut Vec<T>) {
        debug_assert!(count <= self.len());
        let start = self.s;
        out.extend(self.slots[start..start + count].iter_mut().map(|slot| match slot.take() {
            Some(v) => v,
            None => unreachable!("Logic Error: drained a vacant slot"),
        }));
        self.s += count;
    }

    /// Drops every live element and collapses the live range.
    pub(crate) fn scrub(&mut self) {
        let range = self.live_range();
        for slot in &mut self.slots[range] {
            *slot = None;
        }
        self.e = self.s;
    }

    /// Moves the elements in `src` (absolute positions) of `self` into `dst` starting at
    /// absolute position `at`. Source slots become vacant.
    pub(crate) fn move_into(&mut self, src: Range<usize>, dst: &mut Chunk<T>, at: usize) {
        for (k, pos) in src.enumerate() {
            let v = self.take(pos);
            dst.put(at + k, v);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("s", &self.s)
            .field("e", &self.e)
            .field("capacity", &self.capacity())
            .field("live", &self.live())
            .finish()
    }
}
