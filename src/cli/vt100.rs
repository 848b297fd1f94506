//! VT100 control strings and diagnostic message helpers.
//!
//! Diagnostics go inline into the terminal stream, prefixed with a colored
//! severity tag:
//!
//! ```text
//! INFO - Hex debug mode enabled...
//! WARNING - flashModeEnabled not set, cancelling firmware reload...
//! ERROR - "foo" is not a valid command...type help
//! ```

use core::fmt::Write;

/// Line terminator used for all CLI output.
pub const NL: &str = "\r\n";

/// Full terminal reset (RIS).
pub const RESET: &str = "\x1bc";
/// Clear from the cursor to the end of the screen.
pub const CLEAR_BELOW: &str = "\x1b[0J";
/// Clear the whole screen.
pub const CLEAR_ALL: &str = "\x1b[2J";
/// Clear the current line.
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Save the cursor position.
pub const CURSOR_SAVE: &str = "\x1b[s";
/// Restore the saved cursor position.
pub const CURSOR_RESTORE: &str = "\x1b[u";
/// Move the cursor to the top left corner.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Reset all attributes.
pub const NORMAL: &str = "\x1b[0m";
/// Bold.
pub const BOLD: &str = "\x1b[1m";
/// Purple foreground.
pub const PURPLE: &str = "\x1b[35m";
/// Bold red foreground.
pub const BOLD_RED: &str = "\x1b[1;31m";
/// Bold green foreground.
pub const BOLD_GREEN: &str = "\x1b[1;32m";
/// Bold yellow foreground.
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
/// Bold blue foreground.
pub const BOLD_BLUE: &str = "\x1b[1;34m";
/// Bold purple foreground.
pub const BOLD_PURPLE: &str = "\x1b[1;35m";
/// 24-bit foreground color prefix, followed by `;r;g;bm`.
pub const TRUECOLOR_FG: &str = "\x1b[38;2";

/// Default prompt.
pub const PROMPT: &str = "\x1b[1;34m:\x1b[0m ";

/// Severity of an inline diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational.
    Info,
    /// Something was refused or ignored.
    Warning,
    /// The request failed.
    Error,
    /// Developer detail.
    Debug,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Debug => "DEBUG",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Severity::Info => BOLD_GREEN,
            Severity::Warning => BOLD_YELLOW,
            Severity::Error => BOLD_RED,
            Severity::Debug => BOLD_PURPLE,
        }
    }
}

/// Write the colored `TAG - ` prefix for a diagnostic.
pub fn tag(out: &mut dyn Write, severity: Severity) {
    let _ = write!(out, "{}{}{} - ", severity.color(), severity.tag(), NORMAL);
}

/// Write a diagnostic without a trailing newline.
pub fn msg(out: &mut dyn Write, severity: Severity, text: &str) {
    tag(out, severity);
    let _ = out.write_str(text);
}

/// Write a diagnostic followed by a newline.
pub fn print(out: &mut dyn Write, severity: Severity, text: &str) {
    msg(out, severity, text);
    let _ = out.write_str(NL);
}

/// Move the cursor `n` columns to the left.
pub fn cursor_left(out: &mut dyn Write, n: usize) {
    if n > 0 {
        let _ = write!(out, "\x1b[{}D", n);
    }
}
