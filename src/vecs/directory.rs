//! The chunk directory ("pitch").
//!
//! An array of optional chunk handles with unused slots reserved at both ends:
//!
//! ```text
//! | None | None | C0 | C1 | C2 | None | None | None |
//! |-- s_free ---|---- live ----|------ e_free ------|
//! ```
//!
//! Extending the live range at either end only fills a reserved slot, so existing
//! handles never move. When the needed side runs out of slack the directory is either
//! re-centered in place or doubled, copying handles only, never elements.

use super::chunk::Chunk;

/// Slot count of a freshly created directory.
pub(crate) const DEFAULT_PITCH_LEN: usize = 64;

pub(crate) struct Directory<T> {
    pitch: Vec<Option<Chunk<T>>>,
    s_free: usize,
    e_free: usize,
}

impl<T> Directory<T> {
    pub(crate) fn with_pitch_len(pitch_len: usize) -> Self {
        let pitch_len = pitch_len.max(2);
        let s_free = pitch_len / 2;
        Self {
            pitch: (0..pitch_len).map(|_| None).collect(),
            s_free,
            e_free: pitch_len - s_free,
        }
    }

    /// Number of live chunks.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.pitch.len() - self.s_free - self.e_free
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub(crate) fn pitch_len(&self) -> usize {
        self.pitch.len()
    }

    #[cfg(test)]
    pub(crate) fn slack(&self) -> (usize, usize) {
        (self.s_free, self.e_free)
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.pitch.len() - self.e_free
    }

    /// The live handles, front to back.
    #[inline(always)]
    pub(crate) fn live(&self) -> &[Option<Chunk<T>>] {
        let end = self.end();
        &self.pitch[self.s_free..end]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Chunk<T>> {
        self.live().iter().map(|slot| match slot {
            Some(c) => c,
            None => unreachable!("Logic Error: vacant slot inside the live directory range"),
        })
    }

    #[inline(always)]
    pub(crate) fn get(&self, j: usize) -> &Chunk<T> {
        debug_assert!(j < self.len());
        match &self.pitch[self.s_free + j] {
            Some(c) => c,
            None => unreachable!("Logic Error: live chunk {} has no handle", j),
        }
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, j: usize) -> &mut Chunk<T> {
        debug_assert!(j < self.len());
        match &mut self.pitch[self.s_free + j] {
            Some(c) => c,
            None => unreachable!("Logic Error: live chunk {} has no handle", j),
        }
    }

    /// Exclusive references to two distinct live chunks `a < b`.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Chunk<T>, &mut Chunk<T>) {
        debug_assert!(a < b && b < self.len());
        let base = self.s_free;
        let (lo, hi) = self.pitch.split_at_mut(base + b);
        match (&mut lo[base + a], &mut hi[0]) {
            (Some(x), Some(y)) => (x, y),
            _ => unreachable!("Logic Error: live chunk pair ({}, {}) has no handle", a, b),
        }
    }

    pub(crate) fn first(&self) -> Option<&Chunk<T>> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(0))
        }
    }

    pub(crate) fn last(&self) -> Option<&Chunk<T>> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(self.len() - 1))
        }
    }

    pub(crate) fn first_mut(&mut self) -> Option<&mut Chunk<T>> {
        if self.is_empty() {
            None
        } else {
            Some(self.get_mut(0))
        }
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Chunk<T>> {
        if self.is_empty() {
            None
        } else {
            let last = self.len() - 1;
            Some(self.get_mut(last))
        }
    }

    /// Moves the live handles to the middle of the current pitch.
    fn balance(&mut self) {
        let n = self.len();
        let pitch_len = self.pitch.len();
        let old = self.s_free;
        let new = pitch_len / 2 - n / 2;
        if new < old {
            self.pitch[new..old + n].rotate_left(old - new);
        } else if new > old {
            self.pitch[old..new + n].rotate_right(new - old);
        }
        self.s_free = new;
        self.e_free = pitch_len - new - n;
        tracing::trace!(pitch_len, chunks = n, s_free = self.s_free, "directory re-centered");
    }

    /// Restores slack on both sides: re-centers in place while the directory is at most
    /// half full, otherwise doubles it.
    pub(crate) fn grow(&mut self) {
        let n = self.len();
        let old_len = self.pitch.len();
        if n < old_len / 2 {
            self.balance();
            return;
        }

        let new_len = old_len * 2;
        let s_free = (new_len - n) / 2;
        let e_free = new_len - n - s_free;
        let start = self.s_free;
        let mut pitch = Vec::with_capacity(new_len);
        pitch.extend((0..s_free).map(|_| None));
        pitch.extend(self.pitch.drain(start..start + n));
        pitch.extend((0..e_free).map(|_| None));
        self.pitch = pitch;
        self.s_free = s_free;
        self.e_free = e_free;
        tracing::debug!(from = old_len, to = new_len, chunks = n, "directory grown");
    }

    /// Splits the slack evenly once the directory holds no chunk at all.
    fn recenter_if_empty(&mut self) {
        if self.is_empty() {
            let pitch_len = self.pitch.len();
            self.s_free = pitch_len / 2;
            self.e_free = pitch_len - self.s_free;
        }
    }

    pub(crate) fn push_back(&mut self, chunk: Chunk<T>) {
        if self.e_free == 0 {
            self.grow();
        }
        self.e_free -= 1;
        let end = self.end();
        self.pitch[end - 1] = Some(chunk);
    }

    pub(crate) fn push_front(&mut self, chunk: Chunk<T>) {
        if self.s_free == 0 {
            self.grow();
        }
        self.s_free -= 1;
        self.pitch[self.s_free] = Some(chunk);
    }

    pub(crate) fn pop_back(&mut self) -> Option<Chunk<T>> {
        if self.is_empty() {
            return None;
        }
        let last = self.end() - 1;
        let chunk = self.pitch[last].take();
        self.e_free += 1;
        self.recenter_if_empty();
        chunk
    }

    pub(crate) fn pop_front(&mut self) -> Option<Chunk<T>> {
        if self.is_empty() {
            return None;
        }
        let chunk = self.pitch[self.s_free].take();
        self.s_free += 1;
        self.recenter_if_empty();
        chunk
    }

    /// Inserts `chunk` so that it becomes live chunk `p`, shifting the handles on
    /// whichever side of `p` is shorter and has slack.
    pub(crate) fn insert(&mut self, p: usize, chunk: Chunk<T>) {
        let n = self.len();
        debug_assert!(p <= n);
        let front_cheaper = p < n - p;
        let shift_front = match (self.s_free > 0, self.e_free > 0) {
            (true, true) => front_cheaper,
            (true, false) => true,
            (false, true) => false,
            (false, false) => {
                self.grow();
                front_cheaper
            }
        };

        if shift_front {
            // chunks [0, p) move one slot towards the front
            self.s_free -= 1;
            let start = self.s_free;
            self.pitch[start..=start + p].rotate_left(1);
            self.pitch[start + p] = Some(chunk);
        } else {
            // chunks [p, n) move one slot towards the back
            self.e_free -= 1;
            let end = self.end();
            let at = self.s_free + p;
            self.pitch[at..end].rotate_right(1);
            self.pitch[at] = Some(chunk);
        }
    }

    /// Excises live chunk `j`, closing the gap from whichever side holds fewer handles.
    pub(crate) fn remove(&mut self, j: usize) -> Option<Chunk<T>> {
        let n = self.len();
        if j >= n {
            return None;
        }
        let at = self.s_free + j;
        let chunk = self.pitch[at].take();
        if j < n - j - 1 {
            let start = self.s_free;
            self.pitch[start..=at].rotate_right(1);
            self.s_free += 1;
        } else {
            let end = self.end();
            self.pitch[at..end].rotate_left(1);
            self.e_free += 1;
        }
        self.recenter_if_empty();
        chunk
    }

    /// Hands every live chunk to `release` and resets the slack to an even split.
    pub(crate) fn clear(&mut self, mut release: impl FnMut(Chunk<T>)) {
        let end = self.end();
        for slot in &mut self.pitch[self.s_free..end] {
            if let Some(chunk) = slot.take() {
                release(chunk);
            }
        }
        self.e_free = self.pitch.len() - self.s_free;
        self.recenter_if_empty();
    }

    /// Panics if the slack counters and handle placement disagree.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let pitch_len = self.pitch.len();
        assert_eq!(self.s_free + self.e_free + self.len(), pitch_len);
        for (i, slot) in self.pitch.iter().enumerate() {
            let live = i >= self.s_free && i < self.end();
            assert_eq!(slot.is_some(), live, "pitch slot {i} (live = {live})");
        }
    }
}
