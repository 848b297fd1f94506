//! Byte transport seen by the CLI.
//!
//! Input comes from a [`ByteSource`] that is polled, never awaited.
//! Output goes to any [`core::fmt::Write`]; there is no acknowledgment
//! or backpressure, and write errors are ignored.

/// Polled source of raw input bytes (UART, USB CDC, host stdin, ...).
pub trait ByteSource {
    /// `true` if [`read_byte`](Self::read_byte) has a byte to return.
    fn available(&mut self) -> bool;

    /// Take the next byte. Only called after `available` returned `true`.
    fn read_byte(&mut self) -> u8;
}

/// [`ByteSource`] over a byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source that yields `data` once.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn available(&mut self) -> bool {
        self.pos < self.data.len()
    }

    fn read_byte(&mut self) -> u8 {
        match self.data.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                byte
            }
            None => 0,
        }
    }
}
