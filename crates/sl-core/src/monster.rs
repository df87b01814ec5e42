//! Monsters, the disposable side of an encounter.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(Uuid);

impl MonsterId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MonsterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monster tracked for encounters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    /// Stable unique id.
    pub id: MonsterId,
    /// Display name, unique case-insensitively among monsters.
    pub name: String,
    /// Current health; never drops below zero.
    pub health: i64,
}

impl Monster {
    /// Default health when none is given.
    pub const DEFAULT_HEALTH: i64 = 10;

    /// Create a monster.
    pub fn new(name: impl Into<String>, health: i64) -> Self {
        Self {
            id: MonsterId::new(),
            name: name.into(),
            health: health.max(0),
        }
    }

    /// Apply a health delta (negative for damage), clamping at zero.
    /// Deltas past the i64 range saturate instead of wrapping.
    pub fn adjust_health(&mut self, delta: i64) {
        self.health = self.health.saturating_add(delta).max(0);
    }

    /// Whether the monster is still up.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_and_healing() {
        let mut m = Monster::new("Giant Rat", 8);
        m.adjust_health(-3);
        assert_eq!(m.health, 5);
        m.adjust_health(2);
        assert_eq!(m.health, 7);
    }

    #[test]
    fn health_clamps_at_zero() {
        let mut m = Monster::new("Giant Rat", 4);
        m.adjust_health(-10);
        assert_eq!(m.health, 0);
        assert!(!m.is_alive());
    }

    #[test]
    fn negative_starting_health_clamped() {
        let m = Monster::new("Ghost", -5);
        assert_eq!(m.health, 0);
    }

    #[test]
    fn health_saturates_at_extremes() {
        let mut m = Monster::new("Tarrasque", 8);
        m.adjust_health(i64::MAX);
        assert_eq!(m.health, i64::MAX);
        m.adjust_health(i64::MAX);
        assert_eq!(m.health, i64::MAX);
        m.adjust_health(i64::MIN);
        assert_eq!(m.health, 0);
        assert!(!m.is_alive());
    }
}
