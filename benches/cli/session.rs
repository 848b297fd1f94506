use criterion::{BatchSize, Criterion, Throughput};
use kbcli::cli::platform::NullPlatform;
use kbcli::cli::{Cli, Command, Config, Context};
use std::fmt::Write;

/// Output sink that only counts bytes, so formatting cost is measured
/// without growing a buffer.
#[derive(Default)]
struct CountingSink {
    written: usize,
}

impl Write for CountingSink {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.written += s.len();
        Ok(())
    }
}

fn nop(_ctx: &mut Context<'_>, _args: &str) {}

static BENCH_COMMANDS: &[Command] = &[
    Command {
        name: "layer",
        description: "Switch the active layer.",
        handler: nop,
    },
    Command {
        name: "layout",
        description: "Print the key layout.",
        handler: nop,
    },
];

fn setup_cli(echo: bool) -> Cli<NullPlatform> {
    let config = Config {
        echo,
        ..Config::default()
    };
    let mut cli = Cli::with_config(NullPlatform, config);
    cli.register_dictionary(BENCH_COMMANDS, "Bench Commands")
        .expect("Failed to register");
    cli
}

pub fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");
    let input = b"layer 2 with some trailing argument text\x1b[D\x1b[D\x7f";
    group.throughput(Throughput::Bytes(input.len() as u64));

    for echo in [false, true] {
        let name = if echo { "typing_echo" } else { "typing_quiet" };
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                || setup_cli(echo),
                |cli| {
                    let mut out = CountingSink::default();
                    cli.input(input, &mut out).expect("Failed to poll");
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn bench_accept(c: &mut Criterion) {
    let mut group = c.benchmark_group("accept");
    let input = b"layer 2\r";
    group.throughput(Throughput::Bytes(input.len() as u64 * 50));

    group.bench_function("accept_50", |b| {
        b.iter_batched_ref(
            || setup_cli(false),
            |cli| {
                let mut out = CountingSink::default();
                for _ in 0..50 {
                    cli.input(input, &mut out).expect("Failed to poll");
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_history_browse(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");

    group.bench_function("browse_full_ring", |b| {
        b.iter_batched_ref(
            || {
                let mut cli = setup_cli(false);
                let mut out = CountingSink::default();
                for i in 0..20 {
                    let mut line = String::new();
                    let _ = write!(line, "layer {}\r", i);
                    let _ = cli.input(line.as_bytes(), &mut out);
                }
                cli
            },
            |cli| {
                let mut out = CountingSink::default();
                for _ in 0..10 {
                    cli.input(b"\x1b[A", &mut out).expect("Failed to poll");
                }
                for _ in 0..10 {
                    cli.input(b"\x1b[B", &mut out).expect("Failed to poll");
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_complete(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete");

    for (name, input) in [("unique", &b"layo\t"[..]), ("ambiguous", &b"la\t"[..])] {
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                || setup_cli(false),
                |cli| {
                    let mut out = CountingSink::default();
                    cli.input(input, &mut out).expect("Failed to poll");
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}
