//! In-place line editor.
//!
//! [`LineEditor`] owns the line currently being typed: a bounded byte
//! buffer plus a cursor. Every operation keeps
//! `0 <= cursor <= len <= capacity` and is a defined no-op at the
//! boundaries (empty buffer, full buffer, cursor at either end).

use heapless::Vec;

use super::config::LINE_CAPACITY;
use super::error::Error;

/// Bounded editable line with an insertion cursor.
#[derive(Debug, Clone)]
pub struct LineEditor<const N: usize = LINE_CAPACITY> {
    buf: Vec<u8, N>,
    cursor: usize,
}

impl<const N: usize> Default for LineEditor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineEditor<N> {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cursor: 0,
        }
    }

    /// Maximum number of characters the line holds.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of valid characters.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// `true` if the line holds no characters.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// `true` if no further character can be inserted.
    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    /// Insertion point.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The line contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The line contents as text. Only printable ASCII is ever inserted,
    /// so this is empty only when the line is.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    /// Insert `c` at the cursor and advance it.
    ///
    /// # Errors
    ///
    /// * [`Error::LineFull`] - the line is at capacity; nothing changed
    pub fn insert(&mut self, c: u8) -> Result<(), Error> {
        self.buf.insert(self.cursor, c).map_err(|_| Error::LineFull)?;
        self.cursor += 1;
        Ok(())
    }

    /// Delete the character left of the cursor (backspace).
    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buf.remove(self.cursor);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.buf.len() {
            self.buf.remove(self.cursor);
        }
    }

    /// Move one column left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move one column right.
    pub fn move_right(&mut self) {
        if self.cursor < self.buf.len() {
            self.cursor += 1;
        }
    }

    /// Move to column 0.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move past the last character.
    pub fn move_end(&mut self) {
        self.cursor = self.buf.len();
    }

    /// Delete everything from the cursor to the end of the line.
    pub fn kill_to_end(&mut self) {
        self.buf.truncate(self.cursor);
    }

    /// Delete everything left of the cursor; the cursor ends at column 0.
    pub fn kill_to_start(&mut self) {
        let len = self.buf.len();
        self.buf.copy_within(self.cursor..len, 0);
        self.buf.truncate(len - self.cursor);
        self.cursor = 0;
    }

    /// Delete back to just after the nearest space left of the cursor.
    ///
    /// Both the cursor and the line end are moved there, so any text right
    /// of the cursor is discarded too. Without a space the whole line goes.
    pub fn kill_word_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let keep = self.buf[..self.cursor]
            .iter()
            .rposition(|&c| c == b' ')
            .map_or(0, |i| i + 1);
        self.buf.truncate(keep);
        self.cursor = keep;
    }

    /// Swap the characters on either side of the cursor and step forward.
    ///
    /// At column 0 the first two characters are swapped; at the end of the
    /// line the last two are, and the cursor stays put.
    pub fn transpose(&mut self) {
        let len = self.buf.len();
        if len < 2 {
            return;
        }
        let i = self.cursor.max(1).min(len - 1);
        self.buf.swap(i - 1, i);
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    /// Empty the line.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    /// Replace the whole line, truncating to capacity, with the cursor at
    /// the end.
    pub fn set(&mut self, line: &[u8]) {
        self.buf.clear();
        let take = line.len().min(N);
        // `take` never exceeds capacity
        let _ = self.buf.extend_from_slice(&line[..take]);
        self.cursor = take;
    }
}
