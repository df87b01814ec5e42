//! Roll outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The result of rolling a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Individual die values, in roll order.
    pub rolls: Vec<u32>,
    /// Flat modifier applied after summing.
    pub modifier: i64,
    /// Sum of all dice plus the modifier.
    pub total: i64,
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", values.join(", "))?;
        if self.modifier > 0 {
            write!(f, " + {}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, " - {}", -self.modifier)?;
        }
        write!(f, " = {}", self.total)
    }
}
