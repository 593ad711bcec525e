use std::io::{self, Read, Write};
use std::panic;

use anyhow::{Context, Result};
use canyon_hop::FAILURE;
use tracing_subscriber::EnvFilter;

fn solve_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read the course")?;
    panic::catch_unwind(|| canyon_hop::run(&input))
        .ok()
        .context("Solver panicked")
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .init();
    // Panics are reported through the failure line, not the default stderr dump.
    panic::set_hook(Box::new(|info| tracing::error!("{info}")));

    let line = solve_stdin().unwrap_or_else(|err| {
        tracing::debug!("{err:#}");
        FAILURE.to_owned()
    });
    let mut stdout = io::stdout().lock();
    // Nothing left to report to if stdout itself is gone.
    let _ = writeln!(stdout, "{line}");
}
