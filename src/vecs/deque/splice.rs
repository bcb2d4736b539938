//! Arbitrary-position insertion and removal.
//!
//! Both operations work on the chunk owning the target position and at most one of its
//! neighbours:
//!
//! - **insert** opens a slot by shifting the shorter half of the chunk towards whichever
//!   side has room, either inside the chunk or by spilling one element into the
//!   neighbour. When neither is possible the chunk is **split** in two.
//! - **remove** closes the gap by shifting the shorter half, then tries to **merge** the
//!   touched chunk with its neighbour if both fit in one chunk with a quarter chunk to
//!   spare.

use super::ChunkedDeque;
use crate::vecs::pool::ChunkAllocator;

impl<T, A: ChunkAllocator<T>> ChunkedDeque<T, A> {
    /// Inserts `value` so that it ends up at `index`, shifting later elements back.
    ///
    /// `index == 0` is a [`push_front`](ChunkedDeque::push_front) and `index >= len` a
    /// [`push_back`](ChunkedDeque::push_back); out-of-range indices are clamped rather than
    /// rejected.
    ///
    /// Moves at most one chunk's worth of elements plus, when a chunk has to be split, the
    /// directory handles on the shorter side of it.
    pub fn insert(&mut self, index: usize, value: T) {
        if index == 0 {
            return self.push_front(value);
        }
        if index >= self.len {
            return self.push_back(value);
        }
        let (j, i) = self.locate(index);
        self.insert_at(j, i, value);
        self.len += 1;
    }

    fn insert_at(&mut self, j: usize, i: usize, value: T) {
        let cs = self.chunk_size;
        let chunk = self.dir.get(j);
        let n = chunk.len();
        let head_own = chunk.s > 0;
        let head_prev = j > 0 && self.dir.get(j - 1).e < cs;
        let tail_own = chunk.e < cs;
        let tail_next = j + 1 < self.dir.len() && self.dir.get(j + 1).s > 0;

        let towards_head = match (head_own || head_prev, tail_own || tail_next) {
            (true, true) => i < n - i,
            (true, false) => true,
            (false, true) => false,
            (false, false) => return self.split_insert(j, i, value),
        };
        if towards_head {
            self.insert_head(j, i, value, head_own);
        } else {
            self.insert_tail(j, i, value, tail_own);
        }
    }

    /// Opens a slot by moving the first `i` live elements of chunk `j` one step towards
    /// the front.
    fn insert_head(&mut self, j: usize, i: usize, value: T, own_slack: bool) {
        if own_slack {
            let chunk = self.dir.get_mut(j);
            let s = chunk.s;
            chunk.slots[s - 1..s + i].rotate_left(1);
            chunk.s -= 1;
            chunk.put(s - 1 + i, value);
            return;
        }

        // chunk j starts at slot 0; chunk j - 1 has room at its back
        let (prev, chunk) = self.dir.pair_mut(j - 1, j);
        if i == 0 {
            prev.push_back(value);
            return;
        }
        prev.push_back(chunk.take(0));
        chunk.slots[..i].rotate_left(1);
        chunk.put(i - 1, value);
    }

    /// Opens a slot by moving the live elements of chunk `j` from offset `i` onwards one
    /// step towards the back.
    fn insert_tail(&mut self, j: usize, i: usize, value: T, own_slack: bool) {
        if own_slack {
            let chunk = self.dir.get_mut(j);
            let (s, e) = (chunk.s, chunk.e);
            chunk.slots[s + i..=e].rotate_right(1);
            chunk.e += 1;
            chunk.put(s + i, value);
            return;
        }

        // chunk j ends at the last slot; chunk j + 1 has room at its front
        let (chunk, next) = self.dir.pair_mut(j, j + 1);
        let (s, e) = (chunk.s, chunk.e);
        next.push_front(chunk.take(e - 1));
        chunk.slots[s + i..e].rotate_right(1);
        chunk.put(s + i, value);
    }

    /// Splits the full chunk `j` at offset `i`, moving the shorter half into a new chunk.
    fn split_insert(&mut self, j: usize, i: usize, value: T) {
        let mut fresh = self.alloc.acquire();
        let chunk = self.dir.get_mut(j);
        let n = chunk.len();
        debug_assert_eq!(chunk.s, 0);
        debug_assert_eq!(chunk.e, chunk.capacity());

        if i < n - i {
            // [0, i) goes to a new chunk in front; `value` takes the last freed slot
            chunk.move_into(0..i, &mut fresh, 0);
            fresh.s = 0;
            fresh.e = i;
            if i == 0 {
                fresh.push_back(value);
            } else {
                chunk.s = i - 1;
                chunk.put(i - 1, value);
            }
            self.dir.insert(j, fresh);
        } else {
            // [i, e) goes to a new chunk behind, keeping its slot offsets
            let e = chunk.e;
            chunk.move_into(i..e, &mut fresh, i);
            fresh.s = i;
            fresh.e = e;
            chunk.e = i + 1;
            chunk.put(i, value);
            self.dir.insert(j + 1, fresh);
        }
        tracing::trace!(chunk = j, offset = i, chunks = self.dir.len(), "split chunk");
    }

    /// Removes and returns the element at `index`, shifting later elements forward.
    ///
    /// # Panics
    /// Panics with [`DequeError::OutOfRange`](crate::DequeError::OutOfRange) if
    /// `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);
        let (j, i) = self.locate(index);
        let value = self.remove_at(j, i);
        self.len -= 1;
        value
    }

    fn remove_at(&mut self, j: usize, i: usize) -> T {
        let chunk = self.dir.get_mut(j);
        let n = chunk.len();
        let (s, e) = (chunk.s, chunk.e);
        let pos = s + i;
        let value = chunk.take(pos);

        if n == 1 {
            chunk.e = chunk.s;
            self.release_chunk(j);
            return value;
        }

        if i < n - i - 1 {
            chunk.slots[s..=pos].rotate_right(1);
            chunk.s += 1;
            if j > 0 {
                self.merge(j - 1);
            }
        } else {
            chunk.slots[pos..e].rotate_left(1);
            chunk.e -= 1;
            self.merge(j);
        }
        value
    }

    /// Folds chunks `j` and `j + 1` into one when their elements fit in a single chunk
    /// with a quarter of it left free.
    fn merge(&mut self, j: usize) {
        if j + 1 >= self.dir.len() {
            return;
        }
        let cs = self.chunk_size;
        let margin = cs >> 2;
        let (c0, c1) = self.dir.pair_mut(j, j + 1);
        let (n0, n1) = (c0.len(), c1.len());

        if n0 + margin <= c1.s {
            let at = c1.s - n0;
            let range = c0.live_range();
            c0.move_into(range, c1, at);
            c1.s = at;
            c0.e = c0.s;
            self.release_chunk(j);
        } else if n1 + margin <= cs - c0.e {
            let at = c0.e;
            let range = c1.live_range();
            c1.move_into(range, c0, at);
            c0.e += n1;
            c1.e = c1.s;
            self.release_chunk(j + 1);
        } else {
            return;
        }
        tracing::trace!(chunk = j, chunks = self.dir.len(), "merged chunks");
    }
}

#[cfg(test)]
mod tests {
    use crate::ChunkedDeque;

    fn filled(chunk_size: usize, n: i32) -> ChunkedDeque<i32> {
        let mut d = ChunkedDeque::with_chunk_size(chunk_size);
        d.extend(0..n);
        d
    }

    /// Deque whose chunks are all full: `[0..8) [8..16) ...`.
    fn packed(n_chunks: i32) -> ChunkedDeque<i32> {
        filled(8, n_chunks * 8)
    }

    fn live_ranges(d: &ChunkedDeque<i32>) -> Vec<(usize, usize)> {
        d.dir.iter().map(|c| (c.s, c.e)).collect()
    }

    // ─── insert ───────────────────────────────────────────────────────────────
    #[test]
    fn test_splice_insert_clamps_to_ends() {
        let mut d = filled(8, 3);
        d.insert(0, -1);
        d.insert(100, 100);
        d.insert(5, 99);
        assert_eq!(d.dump(), vec![-1, 0, 1, 2, 100, 99]);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_into_empty() {
        let mut d: ChunkedDeque<i32> = ChunkedDeque::with_chunk_size(8);
        d.insert(3, 7);
        assert_eq!(d.dump(), vec![7]);
    }

    #[test]
    fn test_splice_insert_uses_own_tail_slack() {
        let mut d = filled(8, 5);
        d.insert(3, 30);
        assert_eq!(d.dump(), vec![0, 1, 2, 30, 3, 4]);
        assert_eq!(live_ranges(&d), vec![(0, 6)]);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_uses_own_head_slack() {
        let mut d: ChunkedDeque<i32> = ChunkedDeque::with_chunk_size(8);
        for v in (0..6).rev() {
            d.push_front(v);
        }
        // live range [2, 8), no room at the tail
        d.insert(2, 20);
        assert_eq!(d.dump(), vec![0, 1, 20, 2, 3, 4, 5]);
        assert_eq!(live_ranges(&d), vec![(1, 8)]);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_spills_into_previous_chunk() {
        let mut d = packed(2);
        d.push_back(16);
        // [0..8) [8..16) [16]; free the tail of chunk 0
        d.remove(7);
        d.insert(7, 7);
        assert_eq!(live_ranges(&d), vec![(0, 8), (0, 8), (0, 1)]);

        // chunk 1 is full and starts at slot 0; chunk 0 has room at its back again
        d.remove(6);
        d.insert(10, 90);
        assert_eq!(live_ranges(&d), vec![(0, 8), (0, 8), (0, 1)]);
        assert_eq!(
            d.dump(),
            vec![0, 1, 2, 3, 4, 5, 7, 8, 9, 10, 90, 11, 12, 13, 14, 15, 16]
        );
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_tail_spill_to_next() {
        let mut d = packed(3);
        // make room at the front of chunk 2
        d.remove(16);
        assert_eq!(live_ranges(&d), vec![(0, 8), (0, 8), (1, 8)]);
        d.insert(14, 140);
        assert_eq!(live_ranges(&d), vec![(0, 8), (0, 8), (0, 8)]);
        let mut expected: Vec<i32> = (0..24).filter(|&v| v != 16).collect();
        expected.insert(14, 140);
        assert_eq!(d.dump(), expected);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_splits_full_chunk_head() {
        let mut d = packed(3);
        d.insert(10, 100);
        // chunk 1 split: [8, 9] moved into a new chunk before it
        assert_eq!(d.chunk_count(), 4);
        assert_eq!(live_ranges(&d), vec![(0, 8), (0, 2), (1, 8), (0, 8)]);
        let mut expected: Vec<i32> = (0..24).collect();
        expected.insert(10, 100);
        assert_eq!(d.dump(), expected);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_splits_full_chunk_tail() {
        let mut d = packed(3);
        d.insert(14, 140);
        // chunk 1 split: [14, 15] moved into a new chunk after it
        assert_eq!(live_ranges(&d), vec![(0, 8), (0, 7), (6, 8), (0, 8)]);
        let mut expected: Vec<i32> = (0..24).collect();
        expected.insert(14, 140);
        assert_eq!(d.dump(), expected);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_split_at_chunk_start() {
        let mut d = packed(3);
        // offset 0 of chunk 1: the value gets a chunk of its own
        d.insert(8, 80);
        assert_eq!(live_ranges(&d), vec![(0, 8), (0, 1), (0, 8), (0, 8)]);
        assert_eq!(*d.peek(8), 80);
        assert_eq!(*d.peek(9), 8);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_insert_then_remove_restores() {
        let base = {
            let mut d = packed(4);
            d.remove(3);
            d.remove(20);
            d.push_front(-1);
            d
        };
        for idx in 0..=base.len() {
            let mut d = base.clone();
            d.insert(idx, 1000);
            assert_eq!(*d.peek(idx), 1000);
            assert_eq!(d.remove(idx), 1000);
            assert_eq!(d.dump(), base.dump(), "index {idx}");
            d.assert_invariants();
        }
    }

    // ─── remove ───────────────────────────────────────────────────────────────
    #[test]
    fn test_splice_remove_shifts_shorter_side() {
        let mut d = packed(1);
        assert_eq!(d.remove(1), 1);
        assert_eq!(live_ranges(&d), vec![(1, 8)]);
        assert_eq!(d.remove(5), 6);
        assert_eq!(live_ranges(&d), vec![(1, 7)]);
        assert_eq!(d.dump(), vec![0, 2, 3, 4, 5, 7]);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_remove_last_element_of_chunk_releases_it() {
        let mut d = packed(2);
        d.insert(8, 80);
        assert_eq!(d.chunk_count(), 3);
        assert_eq!(d.remove(8), 80);
        assert_eq!(d.chunk_count(), 2);
        assert_eq!(d.dump(), (0..16).collect::<Vec<_>>());
        d.assert_invariants();
    }

    #[test]
    fn test_splice_remove_merges_front_into_back() {
        let mut d = packed(2);
        // shrink chunk 1 from its head side down to [14, 15] at [6, 8)
        for _ in 0..6 {
            d.remove(8);
        }
        assert_eq!(live_ranges(&d), vec![(0, 8), (6, 8)]);
        for idx in [7, 6, 5] {
            d.remove(idx);
        }
        assert_eq!(d.chunk_count(), 2);
        // chunk 0 = [0, 1, 2, 3]: 4 + 2 <= 6 free slots in front of chunk 1
        d.remove(4);
        assert_eq!(live_ranges(&d), vec![(2, 8)]);
        assert_eq!(d.dump(), vec![0, 1, 2, 3, 14, 15]);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_remove_merges_back_into_front() {
        let mut d = filled(8, 12);
        // [0..8) [8..12) -> [0..8) [9..12)
        d.remove(8);
        for idx in [7, 6, 5, 4] {
            d.remove(idx);
        }
        assert_eq!(live_ranges(&d), vec![(0, 4), (1, 4)]);
        // chunk 1 = [9, 10, 11]: 3 + 2 <= 5 free slots behind chunk 0
        d.remove(3);
        assert_eq!(live_ranges(&d), vec![(0, 6)]);
        assert_eq!(d.dump(), vec![0, 1, 2, 9, 10, 11]);
        d.assert_invariants();
    }

    #[test]
    fn test_splice_remove_middle_until_empty() {
        for n in [1, 7, 8, 9, 40, 257] {
            let mut d = filled(8, n);
            let mut r: Vec<i32> = (0..n).collect();
            while !r.is_empty() {
                let mid = r.len() / 2;
                assert_eq!(d.remove(mid), r.remove(mid));
                d.assert_invariants();
            }
            assert!(d.is_empty());
            assert_eq!(d.chunk_count(), 0);
            d.insert(0, 42);
            assert_eq!(d.dump(), vec![42]);
        }
    }

    #[test]
    #[should_panic(expected = "index out of range: 4 (len is 4)")]
    fn test_splice_remove_out_of_range_panics() {
        let mut d = filled(8, 4);
        d.remove(4);
    }
}
