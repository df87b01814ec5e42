//! Dice expression parsing and rolling.
//!
//! Supports the table-chat form `NdS` with optional chained flat
//! modifiers: `2d6`, `d20`, `3d6+2`, `2d8+1-3`. Whitespace is ignored.

pub mod roll;

pub use roll::RollOutcome;

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Most dice one expression may roll.
const MAX_COUNT: u32 = 100;
/// Most sides a die may have.
const MAX_SIDES: u32 = 1000;
/// Widest net flat modifier, in either direction.
const MAX_MODIFIER: i64 = 1_000_000;

/// A parsed dice expression: count, sides, and a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollExpression {
    /// How many dice to roll (1 when the count is omitted).
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Net flat modifier, already summed across `+N`/`-N` parts.
    pub modifier: i64,
}

impl RollExpression {
    /// Parse an expression like `3d6+2`.
    pub fn parse(input: &str) -> MechResult<Self> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let bad = |detail: &str| MechError::InvalidExpression(format!("'{}' ({detail})", input.trim()));

        let d = compact
            .find('d')
            .ok_or_else(|| bad("expected NdS, e.g. 2d6+1"))?;
        let count = if d == 0 {
            1
        } else {
            compact[..d]
                .parse::<u32>()
                .map_err(|_| bad("expected NdS, e.g. 2d6+1"))?
        };

        let after = &compact[d + 1..];
        let sides_end = after.find(['+', '-']).unwrap_or(after.len());
        let sides = after[..sides_end]
            .parse::<u32>()
            .map_err(|_| bad("expected NdS, e.g. 2d6+1"))?;

        let mut modifier: i64 = 0;
        let mut rest = &after[sides_end..];
        while !rest.is_empty() {
            let sign: i64 = match rest.as_bytes()[0] {
                b'+' => 1,
                b'-' => -1,
                _ => return Err(bad("expected NdS, e.g. 2d6+1")),
            };
            rest = &rest[1..];
            let value_end = rest.find(['+', '-']).unwrap_or(rest.len());
            let value = rest[..value_end]
                .parse::<i64>()
                .map_err(|_| bad("expected NdS, e.g. 2d6+1"))?;
            modifier = modifier
                .checked_add(sign * value)
                .ok_or_else(|| bad("modifier must stay within +/-1000000"))?;
            rest = &rest[value_end..];
        }

        if count == 0 || count > MAX_COUNT {
            return Err(bad("count must be 1-100"));
        }
        if sides < 2 || sides > MAX_SIDES {
            return Err(bad("sides must be 2-1000"));
        }
        if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&modifier) {
            return Err(bad("modifier must stay within +/-1000000"));
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Roll the expression.
    pub fn roll(&self, rng: &mut StdRng) -> RollOutcome {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let total = i64::from(rolls.iter().sum::<u32>()) + self.modifier;
        RollOutcome {
            rolls,
            modifier: self.modifier,
            total,
        }
    }
}

impl fmt::Display for RollExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}
