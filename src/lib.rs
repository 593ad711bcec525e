use std::error::Error;
use std::ops::{Deref, Index};

use anyhow::{ensure, Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;

mod fmt;
mod parse;
pub mod solve;

pub use fmt::FAILURE;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CourseError {
    Negative { position: usize, value: i64 },
}

impl Error for CourseError {}

/// Jump budgets, one per position. A zero budget blocks launching from that
/// position, though it may still be landed on.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    budgets: Box<[u32]>,
}

impl From<Vec<u32>> for Course {
    fn from(budgets: Vec<u32>) -> Self {
        Self {
            budgets: budgets.into(),
        }
    }
}

impl Index<usize> for Course {
    type Output = u32;
    fn index(&self, pos: usize) -> &Self::Output {
        &self.budgets[pos]
    }
}

impl Course {
    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    pub fn budgets(&self) -> &[u32] {
        &self.budgets
    }

    /// Generates a course of `length` positions where `blocked` of them are
    /// zero and the rest are uniform in `1..=longest`. Position 0 is never
    /// blocked.
    pub fn random(
        rng: &mut impl Rng,
        length: usize,
        longest: u32,
        blocked: usize,
    ) -> Result<Self> {
        ensure!(longest > 0, "Longest jump must be positive");
        ensure!(
            blocked < length,
            "Blocked count {blocked} must be less than length {length}"
        );
        let mut budgets = (0..length)
            .map(|i| {
                if i < length - blocked {
                    rng.gen_range(1..=longest)
                } else {
                    0
                }
            })
            .collect::<Vec<_>>();
        // Position 0 keeps its non-zero draw.
        budgets[1..].shuffle(rng);
        Ok(budgets.into())
    }

    /// Checks that `path` starts at 0, only moves forward within each
    /// departure budget, and clears the course on its final jump.
    pub fn check(&self, path: &Path) -> Result<()> {
        let (&last, _) = path.split_last().context("Empty path")?;
        ensure!(path[0] == 0, "Path starts at {} instead of 0", path[0]);
        for (i, w) in path.windows(2).enumerate() {
            let (from, to) = (w[0], w[1]);
            ensure!(from < to, "Step {i} does not move forward: {from} -> {to}");
            ensure!(to < self.len(), "Step {i} lands outside the course at {to}");
            let budget = self.budgets[from] as usize;
            ensure!(
                to - from <= budget,
                "Step {i} jumps {} from {from} with budget {budget}",
                to - from,
            );
        }
        ensure!(
            last < self.len() && last + self[last] as usize >= self.len(),
            "Final jump from {last} does not clear a course of length {}",
            self.len(),
        );
        Ok(())
    }
}

/// Positions visited from the start, in order. The final jump from the last
/// position leaves the course.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    positions: Vec<usize>,
}

impl From<Vec<usize>> for Path {
    fn from(positions: Vec<usize>) -> Self {
        Self { positions }
    }
}

impl Deref for Path {
    type Target = [usize];
    fn deref(&self) -> &Self::Target {
        &self.positions
    }
}

impl Path {
    pub fn hops(&self) -> usize {
        self.positions.len()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.positions
    }
}

/// Parses `input`, solves it and renders the single output line.
pub fn run(input: &str) -> String {
    let course = match input.parse::<Course>() {
        Ok(course) => course,
        Err(err) => {
            tracing::debug!("Rejected input: {err:#}");
            return FAILURE.to_owned();
        }
    };
    match solve::bfs(&course) {
        Some(path) => path.to_string(),
        None => FAILURE.to_owned(),
    }
}
