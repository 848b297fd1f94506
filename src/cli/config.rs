//! CLI configuration.
//!
//! Capacities are fixed at compile time; everything that can change at
//! runtime lives in [`Config`], which can also be loaded from a small JSON
//! document:
//!
//! ```rust
//! use kbcli::cli::config::Config;
//!
//! let config = Config::from_json(r#"{"prompt":"> ","hex_debug":true}"#).unwrap();
//! assert_eq!(config.prompt, "> ");
//! assert!(config.hex_debug);
//! assert!(config.echo);
//! ```

use serde::Deserialize;

use super::error::Error;
use super::vt100;

/// Maximum length of the edited line, and of every history entry.
pub const LINE_CAPACITY: usize = 100;

/// Number of history slots. One is reserved for the draft, so
/// `HISTORY_SIZE - 1` lines are retained.
pub const HISTORY_SIZE: usize = 10;

/// Maximum number of registered dictionaries.
pub const MAX_DICTIONARIES: usize = 15;

/// Maximum number of bytes taken from the byte source in one poll.
pub const INPUT_STAGING_SIZE: usize = 64;

/// Column at which `help` starts printing command descriptions.
pub const ENTRY_TAB_ALIGN: usize = 13;

/// Runtime options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Text printed before the line on every redraw.
    pub prompt: &'static str,
    /// Redraw the line after every processed byte. Disable for scripted
    /// input where the terminal output is not read.
    pub echo: bool,
    /// Initial hex debug mode: echo the raw bytes of every poll.
    pub hex_debug: bool,
    /// Column at which `help` aligns command descriptions.
    pub tab_align: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: vt100::PROMPT,
            echo: true,
            hex_debug: false,
            tab_align: ENTRY_TAB_ALIGN,
        }
    }
}

/// Wire form of [`Config`]; every field is optional.
#[derive(Debug, Deserialize)]
struct ConfigDocument<'a> {
    #[serde(borrow)]
    prompt: Option<&'a str>,
    echo: Option<bool>,
    hex_debug: Option<bool>,
    tab_align: Option<usize>,
}

impl Config {
    /// Parse a configuration from JSON. Missing fields keep their default.
    ///
    /// String values are borrowed from `json`, so they must not contain
    /// escape sequences.
    pub fn from_json(json: &'static str) -> Result<Self, Error> {
        let (doc, _) =
            serde_json_core::from_str::<ConfigDocument<'static>>(json).map_err(|_| Error::Config)?;
        let defaults = Self::default();
        Ok(Self {
            prompt: doc.prompt.unwrap_or(defaults.prompt),
            echo: doc.echo.unwrap_or(defaults.echo),
            hex_debug: doc.hex_debug.unwrap_or(defaults.hex_debug),
            tab_align: doc.tab_align.unwrap_or(defaults.tab_align),
        })
    }

    /// Replace the prompt.
    pub fn with_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Enable or disable line redraw.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}
