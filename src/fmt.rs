use std::fmt;

use crate::{Course, CourseError, Path};

pub const FAILURE: &str = "failure";
const OUT: &str = "out";

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A path with no positions never leaves anything, so it reads the same as no path.
        if self.is_empty() {
            return FAILURE.fmt(f);
        }
        for pos in self.iter() {
            write!(f, "{pos}, ")?;
        }
        OUT.fmt(f)
    }
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseError::Negative { position, value } => {
                write!(f, "Negative jump length {value} at position {position}")
            }
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, budget) in self.budgets().iter().enumerate() {
            if i != 0 {
                " ".fmt(f)?;
            }
            budget.fmt(f)?;
        }
        Ok(())
    }
}
