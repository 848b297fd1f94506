//! Line tokenizing and command dispatch.
//!
//! An accepted line is split once: leading spaces are skipped, the command
//! name runs to the next space, and everything after that space is handed
//! to the handler untouched.
//!
//! ```text
//! "  periodic 5000 fast"
//!    └──┬───┘ └───┬───┘
//!     command   argument tail
//! ```
//!
//! There is no quoting and no further splitting; a handler that takes
//! several arguments calls [`tokenize`] again on its tail.

use core::fmt::Write;

use super::error::Error;
use super::registry::{self, Context};
use super::vt100::{self, Severity};

/// Split `line` into the command token and the raw argument tail.
///
/// Both are empty for a blank line. The tail starts one byte past the
/// first space after the command and keeps any further spaces.
pub fn tokenize(line: &str) -> (&str, &str) {
    let line = line.trim_start_matches(' ');
    match line.find(' ') {
        Some(end) => (&line[..end], &line[end + 1..]),
        None => (line, ""),
    }
}

/// Parse a single argument token.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] - `arg` does not parse as `T`
pub fn parse_arg<T: core::str::FromStr>(arg: &str) -> Result<T, Error> {
    arg.parse().map_err(|_| Error::InvalidArgument)
}

/// Look up the command named by `line` and run it.
///
/// A blank line does nothing. An unknown name prints a diagnostic naming
/// it and is reported as [`Error::UnknownCommand`].
pub fn dispatch(line: &str, ctx: &mut Context<'_>) -> Result<(), Error> {
    let (name, args) = tokenize(line);
    if name.is_empty() {
        return Ok(());
    }

    match registry::find(ctx.dictionaries, name) {
        Some(command) => {
            trace!("dispatch {=str}", name);
            (command.handler)(ctx, args);
            Ok(())
        }
        None => {
            warn!("unknown command {=str}", name);
            ctx.newline();
            vt100::tag(&mut *ctx.out, Severity::Error);
            let _ = write!(
                ctx.out,
                "\"{}\" is not a valid command...type {}help{}",
                name,
                vt100::PURPLE,
                vt100::NORMAL
            );
            Err(Error::UnknownCommand)
        }
    }
}
