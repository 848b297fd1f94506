use criterion::{criterion_group, criterion_main};

mod cli;

criterion_group!(
    benches,
    cli::session::bench_typing,
    cli::session::bench_accept,
    cli::session::bench_history_browse,
    cli::session::bench_complete
);
criterion_main!(benches);
