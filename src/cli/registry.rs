//! Command registry.
//!
//! Firmware subsystems contribute their commands as [`Dictionary`]s: named,
//! ordered, `'static` slices of [`Command`]s. The registry only keeps
//! references to them, up to a fixed count.
//!
//! Lookup walks dictionaries in registration order and commands in
//! declaration order; the first exact name match wins, so a command
//! registered earlier shadows a later one with the same name.
//!
//! ```rust
//! use kbcli::cli::registry::{Command, Context, Registry};
//!
//! fn keys(ctx: &mut Context<'_>, _args: &str) {
//!     ctx.print("no keys pressed");
//! }
//!
//! static MATRIX_COMMANDS: &[Command] = &[Command {
//!     name: "keys",
//!     description: "Show pressed keys.",
//!     handler: keys,
//! }];
//!
//! let mut registry: Registry = Registry::new();
//! registry.register(MATRIX_COMMANDS, "Matrix Commands").unwrap();
//! assert!(registry.find("keys").is_some());
//! ```

use core::fmt::Write;

use heapless::Vec;

use super::Session;
use super::config::{Config, MAX_DICTIONARIES};
use super::error::Error;
use super::platform::Platform;
use super::vt100::{self, Severity};

/// Command handler. Receives the execution context and the unparsed text
/// after the command name.
pub type CommandFn = fn(ctx: &mut Context<'_>, args: &str);

/// A named, described, invocable command.
#[derive(Clone, Copy)]
pub struct Command {
    /// Name as typed by the user. Case sensitive.
    pub name: &'static str,
    /// One line description shown by `help`.
    pub description: &'static str,
    /// Called when the command is dispatched.
    pub handler: CommandFn,
}

impl core::fmt::Debug for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A named group of related commands owned by a firmware subsystem.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    /// Title shown by `help`.
    pub name: &'static str,
    /// Commands in declaration order.
    pub commands: &'static [Command],
}

/// What a handler can reach while it runs.
pub struct Context<'a> {
    /// Terminal output.
    pub out: &'a mut dyn Write,
    /// Firmware services.
    pub platform: &'a mut dyn Platform,
    /// Session flags (hex debug, exit request, LED state).
    pub session: &'a mut Session,
    /// Every registered dictionary, in registration order.
    pub dictionaries: &'a [Dictionary],
    /// Active configuration.
    pub config: &'a Config,
}

impl core::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("session", &self.session)
            .field("dictionaries", &self.dictionaries.len())
            .finish_non_exhaustive()
    }
}

impl Context<'_> {
    /// Write raw text.
    pub fn write(&mut self, text: &str) {
        let _ = self.out.write_str(text);
    }

    /// Write text followed by a newline.
    pub fn print(&mut self, text: &str) {
        let _ = self.out.write_str(text);
        let _ = self.out.write_str(vt100::NL);
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        let _ = self.out.write_str(vt100::NL);
    }

    /// `INFO - text`, no trailing newline.
    pub fn info(&mut self, text: &str) {
        vt100::msg(&mut *self.out, Severity::Info, text);
    }

    /// `WARNING - text`, no trailing newline.
    pub fn warning(&mut self, text: &str) {
        vt100::msg(&mut *self.out, Severity::Warning, text);
    }

    /// `ERROR - text`, no trailing newline.
    pub fn error(&mut self, text: &str) {
        vt100::msg(&mut *self.out, Severity::Error, text);
    }
}

/// Bounded, ordered table of dictionaries.
#[derive(Debug, Clone)]
pub struct Registry<const D: usize = MAX_DICTIONARIES> {
    dictionaries: Vec<Dictionary, D>,
}

impl<const D: usize> Default for Registry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> Registry<D> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            dictionaries: Vec::new(),
        }
    }

    /// Append a dictionary.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyName`] - `name` is empty
    /// * [`Error::DictionaryTableFull`] - `D` dictionaries are registered already
    pub fn register(&mut self, commands: &'static [Command], name: &'static str) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        let dictionary = Dictionary { name, commands };
        if self.dictionaries.push(dictionary).is_err() {
            error!("dictionary table full, dropping {=str}", name);
            return Err(Error::DictionaryTableFull);
        }
        debug!("registered dictionary {=str} ({=usize} commands)", name, commands.len());
        Ok(())
    }

    /// Registered dictionaries in registration order.
    pub fn dictionaries(&self) -> &[Dictionary] {
        &self.dictionaries
    }

    /// Number of registered dictionaries.
    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    /// First command named exactly `name`.
    pub fn find(&self, name: &str) -> Option<&'static Command> {
        find(&self.dictionaries, name)
    }

    /// Every command in lookup order.
    pub fn commands(&self) -> impl Iterator<Item = &'static Command> + '_ {
        commands(&self.dictionaries)
    }
}

/// Every command of `dictionaries` in lookup order.
pub fn commands(dictionaries: &[Dictionary]) -> impl Iterator<Item = &'static Command> + '_ {
    dictionaries.iter().flat_map(|dictionary| dictionary.commands.iter())
}

/// First command named exactly `name`.
pub fn find(dictionaries: &[Dictionary], name: &str) -> Option<&'static Command> {
    commands(dictionaries).find(|command| command.name == name)
}
