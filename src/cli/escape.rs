//! Terminal input decoding.
//!
//! Turns the raw byte stream into [`Key`]s. Plain bytes pass through
//! unchanged; VT100 `ESC [` sequences for the cursor, Home/End and
//! Insert/Delete families are folded into a single [`EditCommand`].
//!
//! The decoder keeps its state between calls, so a sequence that arrives
//! split over two polls still decodes.
//!
//! ```text
//!            ESC            '['             A..D,H,F
//! Ground ─────────▶ Escape ─────▶ Csi ─────────────────▶ Ground (Edit)
//!                     │            │ '0'..'9'
//!                     │ other      ▼          '~'
//!                     │          CsiParam ─────────────▶ Ground (Edit / Ignored)
//!                     ▼
//!                  Ground (Byte)
//! ```

/// Escape byte.
pub const ESC: u8 = 0x1B;

/// Readline-style control code for a letter, e.g. `ctrl(b'A') == 0x01`.
pub const fn ctrl(c: u8) -> u8 {
    c & 0b0001_1111
}

/// Logical line editing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Move the cursor to column 0.
    BeginningOfLine,
    /// Move the cursor one column left.
    BackwardChar,
    /// Delete the character under the cursor.
    DeleteChar,
    /// Move the cursor past the last character.
    EndOfLine,
    /// Move the cursor one column right.
    ForwardChar,
    /// Delete the character left of the cursor.
    BackwardDeleteChar,
    /// Tab completion.
    Complete,
    /// Commit the line to history and dispatch it.
    AcceptLine,
    /// Delete from the cursor to the end of the line.
    KillLine,
    /// Clear the screen.
    ClearScreen,
    /// Browse towards newer history entries.
    NextHistory,
    /// Browse towards older history entries.
    PreviousHistory,
    /// Swap the two characters around the cursor.
    TransposeChars,
    /// Delete from the start of the line to the cursor.
    UnixLineDiscard,
    /// Delete back to the previous space.
    UnixWordRubout,
    /// Abandon the current line.
    Interrupt,
}

impl EditCommand {
    /// Map a single control byte to its binding.
    ///
    /// Returns `None` for printable characters and unbound control codes.
    pub fn from_byte(byte: u8) -> Option<Self> {
        let command = match byte {
            0x01 => EditCommand::BeginningOfLine,
            0x02 => EditCommand::BackwardChar,
            0x03 => EditCommand::Interrupt,
            0x05 => EditCommand::EndOfLine,
            0x06 => EditCommand::ForwardChar,
            // Backspace and delete are swapped, as on Linux consoles
            0x08 => EditCommand::DeleteChar,
            0x09 => EditCommand::Complete,
            0x0A | 0x0D => EditCommand::AcceptLine,
            0x0B => EditCommand::KillLine,
            0x0C => EditCommand::ClearScreen,
            0x0E => EditCommand::NextHistory,
            0x10 => EditCommand::PreviousHistory,
            0x14 => EditCommand::TransposeChars,
            0x15 => EditCommand::UnixLineDiscard,
            0x17 => EditCommand::UnixWordRubout,
            0x1F | 0x7F => EditCommand::BackwardDeleteChar,
            _ => return None,
        };
        Some(command)
    }
}

/// Decoded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A byte outside any escape sequence.
    Byte(u8),
    /// A recognized escape sequence.
    Edit(EditCommand),
    /// A complete escape sequence with no binding.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Csi,
    CsiParam(u8),
}

/// Stateful VT100 input decoder.
#[derive(Debug, Clone)]
pub struct Decoder {
    state: State,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a decoder in the ground state.
    pub const fn new() -> Self {
        Self {
            state: State::Ground,
        }
    }

    /// `true` while part of an escape sequence has been consumed.
    pub fn is_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Drop any partially received sequence.
    pub fn reset(&mut self) {
        self.state = State::Ground;
    }

    /// Feed one byte. Returns `None` while a sequence is still incomplete.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            State::Ground => {
                if byte == ESC {
                    self.state = State::Escape;
                    None
                } else {
                    Some(Key::Byte(byte))
                }
            }
            State::Escape => match byte {
                b'[' => {
                    self.state = State::Csi;
                    None
                }
                ESC => None,
                _ => {
                    // A lone ESC is dropped
                    self.state = State::Ground;
                    Some(Key::Byte(byte))
                }
            },
            State::Csi => {
                self.state = State::Ground;
                match byte {
                    b'A' => Some(Key::Edit(EditCommand::PreviousHistory)),
                    b'B' => Some(Key::Edit(EditCommand::NextHistory)),
                    b'C' => Some(Key::Edit(EditCommand::ForwardChar)),
                    b'D' => Some(Key::Edit(EditCommand::BackwardChar)),
                    b'H' => Some(Key::Edit(EditCommand::BeginningOfLine)),
                    b'F' => Some(Key::Edit(EditCommand::EndOfLine)),
                    b'0'..=b'9' => {
                        self.state = State::CsiParam(byte);
                        None
                    }
                    // Unknown final byte: the ESC [ prefix is consumed and
                    // the byte itself is passed on.
                    _ => {
                        trace!("unmapped csi final byte {=u8:#x}", byte);
                        Some(Key::Byte(byte))
                    }
                }
            }
            State::CsiParam(param) => {
                self.state = State::Ground;
                if byte != b'~' {
                    return Some(Key::Byte(byte));
                }
                let key = match param {
                    b'1' | b'5' | b'7' => Key::Edit(EditCommand::BeginningOfLine),
                    b'3' => Key::Edit(EditCommand::DeleteChar),
                    b'4' | b'8' => Key::Edit(EditCommand::EndOfLine),
                    _ => Key::Ignored,
                };
                Some(key)
            }
        }
    }
}
