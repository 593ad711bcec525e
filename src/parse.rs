use std::str::FromStr;

use crate::{Course, CourseError};

impl FromStr for Course {
    type Err = anyhow::Error;

    /// Reads whitespace separated integers until the first token that is not
    /// a 32-bit integer. Everything from that token on is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut budgets = Vec::new();
        for token in s.split_whitespace() {
            let Ok(value) = token.parse::<i32>() else { break };
            let budget = u32::try_from(value).map_err(|_| CourseError::Negative {
                position: budgets.len(),
                value: value.into(),
            })?;
            budgets.push(budget);
        }
        Ok(budgets.into())
    }
}
