//! # kbcli - keyboard firmware debug console
//!
//! An interactive command line for keyboard controller firmware, driven over
//! a serial or USB CDC byte stream. It runs without a heap and is polled from
//! the firmware main loop; each poll drains the bytes that are ready and
//! returns.
//!
//! ## Features
//!
//! ### Line editing
//! - VT100 and Emacs style key bindings (arrows, Home/End, Delete, Ctrl-A/E/K/U/W/T)
//! - Fixed capacity line buffer with an insertion cursor
//! - Full line redraw after every byte
//!
//! ### History
//! - Circular ring of accepted lines, oldest evicted first
//! - The unsaved line is restored when browsing back down
//!
//! ### Commands
//! - Subsystems register named dictionaries of commands
//! - Prefix tab completion over every registered name
//! - Built-in `help`, `version`, `latency`, `periodic`, `led` and friends
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kbcli = "0.1.0"
//! ```
//!
//! ### Registering a dictionary
//!
//! ```rust
//! use kbcli::cli::{Cli, Command, Context};
//! use kbcli::cli::platform::NullPlatform;
//!
//! fn layer(ctx: &mut Context<'_>, args: &str) {
//!     ctx.newline();
//!     ctx.info("Switching to layer ");
//!     ctx.write(args);
//! }
//!
//! static LAYER_COMMANDS: &[Command] = &[Command {
//!     name: "layer",
//!     description: "Switch the active layer.",
//!     handler: layer,
//! }];
//!
//! let mut cli = Cli::new(NullPlatform);
//! cli.register_dictionary(LAYER_COMMANDS, "Layer Commands").unwrap();
//!
//! let mut out = heapless::String::<1024>::new();
//! cli.input(b"layer 2\r", &mut out).unwrap();
//! assert!(out.contains("Switching to layer 2"));
//! ```
//!
//! ### Driving it from a main loop
//!
//! ```rust,no_run
//! use kbcli::cli::{ByteSource, Cli};
//! use kbcli::cli::platform::NullPlatform;
//! # struct Uart;
//! # impl ByteSource for Uart {
//! #     fn available(&mut self) -> bool { false }
//! #     fn read_byte(&mut self) -> u8 { 0 }
//! # }
//! # impl core::fmt::Write for Uart {
//! #     fn write_str(&mut self, _s: &str) -> core::fmt::Result { Ok(()) }
//! # }
//!
//! let mut cli = Cli::new(NullPlatform);
//! let mut rx = Uart;
//! let mut tx = Uart;
//! loop {
//!     // scan the matrix, send reports, ...
//!     let _ = cli.poll(&mut rx, &mut tx);
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `host`: Add the `exit` command for running inside a host process
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod log;

/// Interactive console engine: line editor, history, command registry and
/// the built-in commands.
pub mod cli;
