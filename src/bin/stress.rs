use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use canyon_hop::{solve, Course};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
struct Options {
    trials: usize,
    length: usize,
    longest: u32,
    blocked: usize,
}

impl Options {
    fn from_args() -> Result<Self> {
        let args = std::env::args().skip(1).collect::<Vec<_>>();
        let arg = |i: usize, name: &str, default: usize| -> Result<usize> {
            args.get(i).map_or(Ok(default), |s| {
                s.replace('_', "")
                    .parse()
                    .with_context(|| format!("Invalid {name}: {s:?}"))
            })
        };
        Ok(Self {
            trials: arg(0, "trial count", 16)?,
            length: arg(1, "course length", 1_000_000)?,
            longest: arg(2, "longest jump", 50)?
                .try_into()
                .context("Longest jump out of range")?,
            blocked: arg(3, "blocked count", 10_000)?,
        })
    }
}

struct Trial {
    seed: u64,
    hops: Option<usize>,
    elapsed: Duration,
}

fn run_trial(opts: Options, seed: u64) -> Result<Trial> {
    let mut rng = StdRng::seed_from_u64(seed);
    let course = Course::random(&mut rng, opts.length, opts.longest, opts.blocked)?;
    let start = Instant::now();
    let path = solve::bfs(&course);
    let elapsed = start.elapsed();
    if let Some(path) = &path {
        course
            .check(path)
            .with_context(|| format!("Invalid path for seed {seed}"))?;
    }
    Ok(Trial {
        seed,
        hops: path.map(|path| path.hops()),
        elapsed,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Options::from_args()?;
    tracing::info!(?opts, "Starting trials");

    let base_seed = rand::thread_rng().gen::<u64>();
    let progress = ProgressBar::new(opts.trials as u64);
    progress.set_style(ProgressStyle::with_template(
        "{elapsed_precise} [{wide_bar}] {pos}/{len} trials",
    )?);

    let trials = (0..opts.trials as u64)
        .into_par_iter()
        .map(|i| {
            let trial = run_trial(opts, base_seed.wrapping_add(i));
            progress.inc(1);
            trial
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish_and_clear();

    for (i, trial) in trials.iter().enumerate() {
        let hops = match trial.hops {
            Some(hops) => style(format!("{hops} hops")).green(),
            None => style("no way out".to_owned()).yellow(),
        };
        eprintln!(
            "Trial {i:2} (seed {}): {hops} in {:?}",
            trial.seed, trial.elapsed,
        );
    }
    let solved = trials.iter().filter(|trial| trial.hops.is_some()).count();
    eprintln!(
        "{} {solved}/{} trials cleared, every path valid",
        style("OK").green().bold(),
        trials.len(),
    );
    Ok(())
}
