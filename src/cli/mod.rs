//! Interactive debug console.
//!
//! [`Cli`] is a poll driven line editor with history, tab completion and a
//! registry of named commands. The firmware main loop calls [`Cli::poll`]
//! once per iteration; each call drains the bytes the transport has ready,
//! applies them to the line being edited and redraws the prompt.
//!
//! ```text
//! ByteSource ──► Decoder ──► LineEditor ──┬──► redraw
//!                                         └──► (accept) HistoryRing ─► dispatch ─► handler
//! ```
//!
//! Nothing in here allocates. Every buffer has a compile time capacity
//! (see [`config`]), and running out of room drops input instead of
//! growing.
//!
//! # Example
//!
//! ```rust
//! use kbcli::cli::{Cli, Status};
//! use kbcli::cli::platform::NullPlatform;
//!
//! let mut cli = Cli::new(NullPlatform);
//! let mut out = heapless::String::<4096>::new();
//!
//! let status = cli.input(b"vers\t\r", &mut out).unwrap();
//! assert_eq!(status, Status::Running);
//! assert!(out.contains("Version:"));
//! assert_eq!(cli.history().iter().next(), Some(&b"version"[..]));
//! ```

pub mod builtins;
pub mod completion;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod escape;
pub mod history;
pub mod io;
pub mod platform;
pub mod registry;
pub mod vt100;

use core::fmt::Write;

use heapless::Vec;

pub use self::config::Config;
pub use self::editor::LineEditor;
pub use self::error::Error;
pub use self::history::HistoryRing;
pub use self::io::{ByteSource, SliceSource};
pub use self::platform::Platform;
pub use self::registry::{Command, CommandFn, Context, Dictionary, Registry};

use self::completion::Completion;
use self::config::INPUT_STAGING_SIZE;
use self::escape::{Decoder, EditCommand, Key};
use self::vt100::Severity;

/// State shared between the engine and command handlers for the lifetime
/// of the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Echo every staged input byte in hex before processing it.
    pub hex_debug: bool,
    /// Set by a handler to ask the host process to leave the poll loop.
    pub exit: bool,
    /// Last state written to the indicator LED.
    pub led: bool,
}

/// Result of a successful [`Cli::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Keep polling.
    Running,
    /// A command asked the host to stop. Bytes after the accepting newline
    /// were discarded.
    Exit,
}

/// The console engine.
///
/// Owns the line being edited, the history, the command registry and the
/// [`Platform`] that command handlers talk to.
pub struct Cli<P: Platform> {
    editor: LineEditor,
    history: HistoryRing,
    registry: Registry,
    decoder: Decoder,
    session: Session,
    config: Config,
    platform: P,
}

impl<P: Platform> core::fmt::Debug for Cli<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cli")
            .field("line", &self.editor.as_str())
            .field("cursor", &self.editor.cursor())
            .field("history", &self.history.len())
            .field("dictionaries", &self.registry.len())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<P: Platform> Cli<P> {
    /// Create a console with the default [`Config`].
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, Config::default())
    }

    /// Create a console with `config`.
    ///
    /// The built-in dictionaries are registered first so their names win
    /// over any later registration.
    pub fn with_config(platform: P, config: Config) -> Self {
        let mut registry = Registry::new();
        // An empty table always has room for the built-ins
        let _ = registry.register(builtins::GENERAL_COMMANDS, builtins::GENERAL_DICTIONARY);
        #[cfg(feature = "host")]
        let _ = registry.register(builtins::HOST_COMMANDS, builtins::HOST_DICTIONARY);

        Self {
            editor: LineEditor::new(),
            history: HistoryRing::new(),
            registry,
            decoder: Decoder::new(),
            session: Session {
                hex_debug: config.hex_debug,
                ..Session::default()
            },
            config,
            platform,
        }
    }

    /// Register a subsystem's commands under `name`.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyName`] - `name` is empty
    /// * [`Error::DictionaryTableFull`] - no room for another dictionary
    pub fn register_dictionary(&mut self, commands: &'static [Command], name: &'static str) -> Result<(), Error> {
        self.registry.register(commands, name)
    }

    /// The line currently being edited.
    pub fn line(&self) -> &str {
        self.editor.as_str()
    }

    /// The line editor.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Accepted lines.
    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// The command registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Session flags.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The platform handlers run against.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Drain `source` and process everything it had ready.
    ///
    /// Up to [`INPUT_STAGING_SIZE`] bytes are staged per call. The prompt
    /// and line are redrawn after every byte unless echo is disabled.
    ///
    /// # Errors
    ///
    /// * [`Error::InputOverflow`] - more bytes were ready than fit in the
    ///   staging area. All staged input is dropped, a diagnostic is printed
    ///   and the line is cleared.
    pub fn poll<S: ByteSource, W: Write>(&mut self, source: &mut S, out: &mut W) -> Result<Status, Error> {
        let mut staged: Vec<u8, INPUT_STAGING_SIZE> = Vec::new();
        while source.available() {
            if staged.push(source.read_byte()).is_err() {
                warn!("input staging full, dropping {=usize} bytes", staged.len());
                let _ = out.write_str(vt100::NL);
                vt100::msg(out, Severity::Error, "Serial line buffer is full, dropping character and resetting...");
                self.editor.clear();
                self.history.reset_cursor();
                self.decoder.reset();
                return Err(Error::InputOverflow);
            }
        }

        if staged.is_empty() {
            return Ok(Status::Running);
        }

        if self.session.hex_debug {
            self.echo_hex(&staged, out);
        }

        for &byte in staged.iter() {
            if self.process(byte, out) == Status::Exit {
                return Ok(Status::Exit);
            }
            if self.config.echo {
                self.redraw(out);
            }
        }
        Ok(Status::Running)
    }

    /// Process a buffered chunk of input, as if `data` arrived in one poll.
    ///
    /// # Errors
    ///
    /// See [`Cli::poll`].
    pub fn input<W: Write>(&mut self, data: &[u8], out: &mut W) -> Result<Status, Error> {
        let mut source = SliceSource::new(data);
        self.poll(&mut source, out)
    }

    /// Clear the terminal line and print the prompt and the current line,
    /// leaving the terminal cursor at the editor's cursor.
    pub fn redraw(&self, out: &mut dyn Write) {
        let _ = write!(
            out,
            "{}\r{}{}{}",
            vt100::CLEAR_LINE,
            self.config.prompt,
            self.editor.as_str(),
            vt100::NORMAL
        );
        vt100::cursor_left(out, self.editor.len() - self.editor.cursor());
    }

    fn echo_hex(&self, staged: &[u8], out: &mut dyn Write) {
        let _ = write!(out, "{}{}{}", vt100::CURSOR_SAVE, vt100::NL, vt100::CLEAR_LINE);
        for byte in staged {
            let _ = write!(out, "0x{:02X} ", byte);
        }
        let _ = out.write_str(vt100::CURSOR_RESTORE);
    }

    fn process(&mut self, byte: u8, out: &mut dyn Write) -> Status {
        match self.decoder.feed(byte) {
            Some(Key::Edit(command)) => self.apply(command, out),
            Some(Key::Byte(byte)) => match EditCommand::from_byte(byte) {
                Some(command) => self.apply(command, out),
                None => {
                    self.insert(byte);
                    Status::Running
                }
            },
            Some(Key::Ignored) | None => Status::Running,
        }
    }

    fn insert(&mut self, byte: u8) {
        if !(0x20..0x7F).contains(&byte) {
            trace!("ignoring byte {=u8:#x}", byte);
            return;
        }
        if let Err(err) = self.editor.insert(byte) {
            trace!("dropping {=u8:#x}: {}", byte, err);
        }
    }

    fn apply(&mut self, command: EditCommand, out: &mut dyn Write) -> Status {
        match command {
            EditCommand::AcceptLine => return self.accept(out),
            EditCommand::BeginningOfLine => self.editor.move_home(),
            EditCommand::EndOfLine => self.editor.move_end(),
            EditCommand::BackwardChar => self.editor.move_left(),
            EditCommand::ForwardChar => self.editor.move_right(),
            EditCommand::BackwardDeleteChar => self.editor.delete_backward(),
            EditCommand::DeleteChar => self.editor.delete_forward(),
            EditCommand::KillLine => self.editor.kill_to_end(),
            EditCommand::UnixLineDiscard => self.editor.kill_to_start(),
            EditCommand::UnixWordRubout => self.editor.kill_word_backward(),
            EditCommand::TransposeChars => self.editor.transpose(),
            EditCommand::Complete => self.complete(out),
            EditCommand::PreviousHistory => self.previous_history(),
            EditCommand::NextHistory => self.next_history(),
            EditCommand::ClearScreen => {
                let _ = write!(out, "{}{}{}", vt100::CLEAR_ALL, vt100::CURSOR_HOME, self.config.prompt);
                self.editor.clear();
                self.history.reset_cursor();
            }
            EditCommand::Interrupt => {
                let _ = out.write_str(vt100::NL);
                self.editor.clear();
                self.history.reset_cursor();
            }
        }
        Status::Running
    }

    fn accept(&mut self, out: &mut dyn Write) -> Status {
        self.history.commit(self.editor.as_bytes());

        let mut ctx = Context {
            out,
            platform: &mut self.platform,
            session: &mut self.session,
            dictionaries: self.registry.dictionaries(),
            config: &self.config,
        };
        if let Err(err) = dispatch::dispatch(self.editor.as_str(), &mut ctx) {
            debug!("dispatch failed: {}", err);
        }

        self.history.clear_draft();
        self.history.reset_cursor();
        self.editor.clear();

        if self.session.exit {
            self.session.exit = false;
            debug!("exit requested");
            return Status::Exit;
        }
        Status::Running
    }

    fn complete(&mut self, out: &mut dyn Write) {
        let completion = completion::complete(self.editor.as_str(), self.registry.dictionaries(), out);
        if let Completion::Unique(name) = completion {
            self.editor.set(name.as_bytes());
        }
    }

    fn previous_history(&mut self) {
        if !self.history.is_browsing() {
            self.history.save_draft(self.editor.as_bytes());
        }
        let line = self.history.recall_previous();
        self.editor.set(line);
    }

    fn next_history(&mut self) {
        let line = self.history.recall_next();
        self.editor.set(line);
    }
}
