//! Command history ring.
//!
//! `N` fixed slots addressed by three wrapping indices:
//!
//! ```text
//!   head            cursor          tail
//!    │                │               │
//!  ┌─▼──┬────┬────┬───▼┬────┬────┬────▼┬────┐
//!  │old │    │    │    │    │ new│draft│    │
//!  └────┴────┴────┴────┴────┴────┴─────┴────┘
//! ```
//!
//! `head` is the oldest retained entry, `tail` the slot the next commit
//! writes to, and `cursor` the entry shown while browsing. The slot at
//! `tail` doubles as the draft: the unsaved line is parked there when
//! browsing starts so that walking back down restores it. That reserved
//! slot leaves `N - 1` usable entries; committing into a full ring evicts
//! the oldest one.

use heapless::Vec;

use super::config::{HISTORY_SIZE, LINE_CAPACITY};

/// Slot index one step newer, wrapping at `n`.
pub const fn ring_next(index: usize, n: usize) -> usize {
    (index + 1) % n
}

/// Slot index one step older, wrapping at `n`.
pub const fn ring_prev(index: usize, n: usize) -> usize {
    (index + n - 1) % n
}

/// Fixed capacity circular log of accepted lines.
#[derive(Debug, Clone)]
pub struct HistoryRing<const N: usize = HISTORY_SIZE, const LINE: usize = LINE_CAPACITY> {
    slots: [Vec<u8, LINE>; N],
    head: usize,
    tail: usize,
    cursor: usize,
}

impl<const N: usize, const LINE: usize> Default for HistoryRing<N, LINE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const LINE: usize> HistoryRing<N, LINE> {
    /// Create an empty ring. `N` must be at least 2: one entry plus the
    /// draft slot.
    pub fn new() -> Self {
        const { assert!(N >= 2, "history ring needs at least two slots") };
        Self {
            slots: core::array::from_fn(|_| Vec::new()),
            head: 0,
            tail: 0,
            cursor: 0,
        }
    }

    /// Number of committed entries currently retained.
    pub fn len(&self) -> usize {
        (self.tail + N - self.head) % N
    }

    /// `true` if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// `true` while an older entry than the draft is being shown.
    pub fn is_browsing(&self) -> bool {
        self.cursor != self.tail
    }

    /// Retained entries, oldest first. The draft slot is not included.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.len()).map(move |i| self.slots[(self.head + i) % N].as_slice())
    }

    /// Store an accepted line and advance `tail`.
    ///
    /// Lines that are empty after skipping leading spaces are ignored and
    /// `false` is returned. Lines longer than a slot are truncated.
    pub fn commit(&mut self, line: &[u8]) -> bool {
        if line.iter().all(|&c| c == b' ') {
            return false;
        }
        Self::store(&mut self.slots[self.tail], line);
        self.tail = ring_next(self.tail, N);
        if self.tail == self.head {
            self.evict_oldest();
        }
        // The new draft slot may still hold the evicted line
        self.slots[self.tail].clear();
        self.cursor = self.tail;
        true
    }

    /// Park the in-progress line in the draft slot without moving anything.
    pub fn save_draft(&mut self, line: &[u8]) {
        Self::store(&mut self.slots[self.tail], line);
    }

    /// Blank the draft slot.
    pub fn clear_draft(&mut self) {
        self.slots[self.tail].clear();
    }

    /// Stop browsing; the next recall starts from the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.tail;
    }

    /// Step towards `head` and return the entry there.
    ///
    /// At the oldest entry the cursor stays put and the same entry is
    /// returned again. On an empty ring this is the draft.
    pub fn recall_previous(&mut self) -> &[u8] {
        if self.cursor != self.head {
            self.cursor = ring_prev(self.cursor, N);
        }
        &self.slots[self.cursor]
    }

    /// Step towards `tail` and return the entry there.
    ///
    /// Arriving back at `tail` yields the draft.
    pub fn recall_next(&mut self) -> &[u8] {
        if self.cursor != self.tail {
            self.cursor = ring_next(self.cursor, N);
        }
        &self.slots[self.cursor]
    }

    fn evict_oldest(&mut self) {
        debug!("history full, evicting slot {=usize}", self.head);
        self.head = ring_next(self.head, N);
    }

    fn store(slot: &mut Vec<u8, LINE>, line: &[u8]) {
        slot.clear();
        let take = line.len().min(LINE);
        // `take` never exceeds capacity
        let _ = slot.extend_from_slice(&line[..take]);
    }
}
