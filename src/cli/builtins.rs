//! Built-in "General Commands" dictionary.
//!
//! Registered by [`Cli::new`](super::Cli::new) before any firmware
//! subsystem gets a chance, so these names shadow later duplicates.

use core::fmt::Write;

use super::dispatch::{parse_arg, tokenize};
use super::registry::{Command, Context};
use super::vt100;

/// Title of the built-in dictionary.
pub const GENERAL_DICTIONARY: &str = "General Commands";

/// Built-in commands, in `help` order.
pub static GENERAL_COMMANDS: &[Command] = &[
    Command {
        name: "clear",
        description: "Clear the screen.",
        handler: clear,
    },
    Command {
        name: "cliDebug",
        description: "Enables/Disables hex output of the most recent cli input.",
        handler: cli_debug,
    },
    Command {
        name: "colorTest",
        description: "Displays a True Color ANSI test sequence to test terminal. If it displays in color, you're good.",
        handler: color_test,
    },
    Command {
        name: "help",
        description: "You're looking at it :P",
        handler: help,
    },
    Command {
        name: "latency",
        description: "Show latency of specific modules and routines. Specify index for a single item",
        handler: latency,
    },
    Command {
        name: "led",
        description: "Enables/Disables indicator LED. Try a couple times just in case the LED is in an odd state.\r\n\t\t\x1b[1;33mWarning\x1b[0m: May adversely affect some modules...",
        handler: led,
    },
    Command {
        name: "periodic",
        description: "Set the number of clock cycles between periodic scans.",
        handler: periodic,
    },
    Command {
        name: "rand",
        description: "If entropy available, print a random 32-bit number.",
        handler: rand,
    },
    Command {
        name: "reload",
        description: "Signals microcontroller to reflash/reload.",
        handler: reload,
    },
    Command {
        name: "reset",
        description: "Resets the terminal back to initial settings.",
        handler: reset,
    },
    Command {
        name: "restart",
        description: "Sends a software restart, should be similar to powering on the device.",
        handler: restart,
    },
    Command {
        name: "tick",
        description: "Displays the fundamental tick size, and current ticks since last systick.",
        handler: tick,
    },
    Command {
        name: "version",
        description: "Version information about this firmware.",
        handler: version,
    },
];

/// Title of the host-only dictionary.
#[cfg(feature = "host")]
pub const HOST_DICTIONARY: &str = "Host Commands";

/// Commands that only make sense when the CLI runs inside a host process.
#[cfg(feature = "host")]
pub static HOST_COMMANDS: &[Command] = &[Command {
    name: "exit",
    description: "Host only - Exits cli.",
    handler: exit,
}];

fn clear(ctx: &mut Context<'_>, _args: &str) {
    let _ = write!(ctx.out, "{}{}{}", vt100::CLEAR_ALL, vt100::CURSOR_HOME, ctx.config.prompt);
}

fn cli_debug(ctx: &mut Context<'_>, _args: &str) {
    ctx.newline();
    ctx.session.hex_debug = !ctx.session.hex_debug;
    debug!("hex debug mode {=bool}", ctx.session.hex_debug);
    if ctx.session.hex_debug {
        ctx.info("Hex debug mode enabled...");
    } else {
        ctx.info("Hex debug mode disabled...");
    }
}

fn color_test(ctx: &mut Context<'_>, _args: &str) {
    ctx.newline();
    let _ = write!(
        ctx.out,
        "{};255;100;0mTRUECOLOR{}{}",
        vt100::TRUECOLOR_FG,
        vt100::NORMAL,
        vt100::NL
    );
}

#[cfg(feature = "host")]
fn exit(ctx: &mut Context<'_>, _args: &str) {
    ctx.session.exit = true;
}

fn help(ctx: &mut Context<'_>, _args: &str) {
    // No sorting, dictionaries and commands print in lookup order
    for dictionary in ctx.dictionaries {
        let _ = write!(
            ctx.out,
            "{}{}{}{}{}",
            vt100::NL,
            vt100::BOLD_GREEN,
            dictionary.name,
            vt100::NORMAL,
            vt100::NL
        );
        for command in dictionary.commands {
            let _ = write!(ctx.out, " {}{}{}", vt100::PURPLE, command.name, vt100::NORMAL);
            let pad = ctx.config.tab_align.saturating_sub(command.name.len());
            let _ = write!(ctx.out, "{:pad$}{}{}", "", command.description, vt100::NL, pad = pad);
        }
    }
}

fn latency_row(ctx: &mut Context<'_>, index: u8) {
    let stats = ctx.platform.latency(index);
    let _ = write!(
        ctx.out,
        "{}{}:{}\t{}\t{}\t{}\t{}\t{}",
        vt100::NL,
        index,
        ctx.platform.latency_name(index),
        stats.count,
        stats.min,
        stats.average,
        stats.last,
        stats.max
    );
}

fn latency(ctx: &mut Context<'_>, args: &str) {
    let (arg, _) = tokenize(args);
    ctx.newline();
    ctx.write("Latency");
    ctx.newline();
    ctx.write("<i>:<module>\t<count>\t<min>\t<avg>\t<last>\t<max>");

    let resources = ctx.platform.latency_resources();
    if arg.is_empty() {
        for index in 0..resources {
            latency_row(ctx, index);
        }
        return;
    }

    match parse_arg::<u8>(arg) {
        Ok(index) if index < resources => latency_row(ctx, index),
        _ => {
            ctx.newline();
            ctx.warning("No such latency resource: ");
            ctx.write(arg);
        }
    }
}

fn led(ctx: &mut Context<'_>, _args: &str) {
    ctx.session.led = !ctx.session.led;
    ctx.platform.set_indicator_led(ctx.session.led);
}

fn periodic(ctx: &mut Context<'_>, args: &str) {
    let (arg, _) = tokenize(args);
    ctx.newline();

    if !arg.is_empty() {
        match parse_arg::<u32>(arg) {
            Ok(cycles) => ctx.platform.set_periodic_cycles(cycles),
            Err(err) => {
                warn!("periodic: {}", err);
                ctx.warning("Invalid cycle count: ");
                ctx.print(arg);
            }
        }
    }

    ctx.info("Period Clock Cycles: ");
    let cycles = ctx.platform.periodic_cycles();
    let _ = write!(ctx.out, "{}", cycles);
}

fn rand(ctx: &mut Context<'_>, _args: &str) {
    ctx.newline();
    match ctx.platform.random_u32() {
        Some(value) => {
            ctx.info("Rand: ");
            let _ = write!(ctx.out, "0x{:08X}", value);
        }
        None => ctx.info("No entropy available!"),
    }
}

fn reload(ctx: &mut Context<'_>, _args: &str) {
    if !ctx.platform.flash_mode_enabled() {
        ctx.newline();
        ctx.warning("flashModeEnabled not set, cancelling firmware reload...");
        ctx.newline();
        ctx.info("Set flashModeEnabled to 1 in your firmware configuration.");
        return;
    }
    ctx.platform.firmware_reload();
}

fn reset(ctx: &mut Context<'_>, _args: &str) {
    ctx.write(vt100::RESET);
}

fn restart(ctx: &mut Context<'_>, _args: &str) {
    ctx.platform.soft_reset();
}

fn tick(ctx: &mut Context<'_>, _args: &str) {
    ctx.newline();
    let now = ctx.platform.now();

    ctx.info("ns per cycletick: ");
    let _ = write!(ctx.out, "{}{}", ctx.platform.ns_per_tick(), vt100::NL);
    ctx.info("<systick ms>:<cycleticks since systick>");
    let _ = write!(ctx.out, "{}{}:{}{}", vt100::NL, now.ms, now.ticks, vt100::NL);
}

fn version(ctx: &mut Context<'_>, _args: &str) {
    let info = ctx.platform.build_info();
    let fields = [
        (" Revision:      ", info.revision),
        (" Revision #:    ", info.revision_number),
        (" Version:       ", info.version),
        (" Branch:        ", info.branch),
        (" Tree Status:   ", info.tree_status),
        (" Repo Origin:   ", info.repo_origin),
        (" Commit Date:   ", info.commit_date),
        (" Commit Author: ", info.commit_author),
        (" Build Date:    ", info.build_date),
        (" Build OS:      ", info.build_os),
        (" Compiler:      ", info.compiler),
        (" Architecture:  ", info.arch),
        (" Chip Compiled: ", info.chip),
        (" CPU:           ", info.cpu),
        (" Device:        ", info.device),
        (" Modules:       ", info.modules),
    ];

    ctx.newline();
    for (label, value) in fields {
        let _ = write!(ctx.out, "{}{}{}{}{}", vt100::BOLD, label, vt100::NORMAL, value, vt100::NL);
    }
}
