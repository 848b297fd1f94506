#![allow(dead_code)]

use kbcli::cli::platform::{BuildInfo, LatencyStats, Platform, Timestamp};
use kbcli::cli::{ByteSource, Cli, Command, Config, Context};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Platform double that records every call the built-ins make.
#[derive(Debug, Default)]
pub struct MockPlatform {
    pub cycles: u32,
    pub led: Option<bool>,
    pub led_writes: usize,
    pub flash_mode: bool,
    pub reloads: usize,
    pub restarts: usize,
    pub entropy: Option<u32>,
}

impl Platform for MockPlatform {
    fn periodic_cycles(&self) -> u32 {
        self.cycles
    }

    fn set_periodic_cycles(&mut self, cycles: u32) {
        self.cycles = cycles;
    }

    fn random_u32(&mut self) -> Option<u32> {
        self.entropy
    }

    fn latency_resources(&self) -> u8 {
        2
    }

    fn latency_name(&self, index: u8) -> &str {
        match index {
            0 => "matrix",
            _ => "usb",
        }
    }

    fn latency(&self, index: u8) -> LatencyStats {
        let base = u32::from(index) * 100;
        LatencyStats {
            count: 10,
            min: base + 1,
            average: base + 5,
            last: base + 4,
            max: base + 9,
        }
    }

    fn set_indicator_led(&mut self, on: bool) {
        self.led = Some(on);
        self.led_writes += 1;
    }

    fn flash_mode_enabled(&self) -> bool {
        self.flash_mode
    }

    fn firmware_reload(&mut self) {
        self.reloads += 1;
    }

    fn soft_reset(&mut self) {
        self.restarts += 1;
    }

    fn now(&self) -> Timestamp {
        Timestamp { ms: 1234, ticks: 56 }
    }

    fn ns_per_tick(&self) -> &str {
        "13.9"
    }

    fn build_info(&self) -> BuildInfo {
        BuildInfo {
            revision: "3f2a9c1",
            revision_number: "1042",
            tree_status: "Clean",
            build_os: "linux",
            device: "K-Type",
            chip: "mk20dx256",
            cpu: "cortex-m4",
            ..BuildInfo::default()
        }
    }
}

/// Byte source fed in chunks, to model bytes trickling in between polls.
#[derive(Debug, Default)]
pub struct MockSerial {
    rx: VecDeque<u8>,
}

impl MockSerial {
    pub fn push(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }
}

impl ByteSource for MockSerial {
    fn available(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read_byte(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0)
    }
}

thread_local! {
    /// (command, argument tail) of every capturing handler call on this thread
    static CAPTURED: RefCell<Vec<(String, String)>> = const { RefCell::new(Vec::new()) };
}

fn capture(name: &str, args: &str) {
    CAPTURED.with(|calls| calls.borrow_mut().push((name.to_string(), args.to_string())));
}

/// Drain the calls recorded on this thread.
pub fn take_captured() -> Vec<(String, String)> {
    CAPTURED.with(|calls| calls.borrow_mut().drain(..).collect())
}

fn keys_handler(_ctx: &mut Context<'_>, args: &str) {
    capture("keys", args);
}

fn layer_handler(ctx: &mut Context<'_>, args: &str) {
    capture("layer", args);
    ctx.newline();
    ctx.info("layer ");
    ctx.write(args);
}

fn led_handler(_ctx: &mut Context<'_>, args: &str) {
    capture("led", args);
}

pub static MATRIX_COMMANDS: &[Command] = &[
    Command {
        name: "keys",
        description: "Show pressed keys.",
        handler: keys_handler,
    },
    Command {
        name: "layer",
        description: "Switch the active layer.",
        handler: layer_handler,
    },
    // Shadowed by the built-in `led`
    Command {
        name: "led",
        description: "Matrix LED.",
        handler: led_handler,
    },
];

/// Console with the matrix dictionary registered and echo off, so the
/// output only holds what commands and diagnostics print.
pub fn quiet_cli() -> Cli<MockPlatform> {
    let config = Config {
        echo: false,
        ..Config::default()
    };
    let mut cli = Cli::with_config(MockPlatform::default(), config);
    cli.register_dictionary(MATRIX_COMMANDS, "Matrix Commands").unwrap();
    cli
}

/// Feed `input` in one poll and return everything written.
pub fn run(cli: &mut Cli<MockPlatform>, input: &[u8]) -> String {
    let mut out = String::new();
    let _ = cli.input(input, &mut out);
    out
}
