//! Prefix based tab completion of command names.
//!
//! Only the command token is considered; argument text is ignored and is
//! lost when a completion is applied. Every registered name that starts
//! with the token is listed below the prompt. When exactly one name
//! matches, the caller replaces the line with it.
//!
//! A token that already spells a full command name counts as a candidate
//! like any other: on its own it completes to itself, next to a longer
//! name it shares a prefix with it is ambiguous.

use core::fmt::Write;

use super::dispatch::tokenize;
use super::registry::{self, Dictionary};
use super::vt100;

/// Outcome of a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Nothing to complete (blank line) or no name matched.
    NoMatch,
    /// Exactly one name matched.
    Unique(&'static str),
    /// Several names matched; the count is given.
    Ambiguous(usize),
}

/// Find the registered names prefixed by the command token of `line`.
///
/// Each candidate is printed on its own line below the prompt, with the
/// cursor saved and restored around the list.
pub fn complete(line: &str, dictionaries: &[Dictionary], out: &mut dyn Write) -> Completion {
    let (token, _) = tokenize(line);
    if line.is_empty() {
        return Completion::NoMatch;
    }

    let _ = write!(out, "{}{}{}{}", vt100::CURSOR_SAVE, vt100::NL, vt100::CLEAR_BELOW, vt100::PURPLE);

    let mut matches = 0;
    let mut last = "";
    for command in registry::commands(dictionaries) {
        if command.name.starts_with(token) {
            matches += 1;
            last = command.name;
            let _ = write!(out, "  {}{}", command.name, vt100::NL);
        }
    }

    let _ = write!(out, "{}{}", vt100::CURSOR_RESTORE, vt100::NORMAL);

    match matches {
        0 => Completion::NoMatch,
        1 => {
            let _ = out.write_str(vt100::CLEAR_BELOW);
            Completion::Unique(last)
        }
        n => Completion::Ambiguous(n),
    }
}
