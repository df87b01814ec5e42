//! Encounters: named rosters of characters and monsters.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncounterId(Uuid);

impl EncounterId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EncounterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EncounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A prepared roster to deal initiative to.
///
/// Members are stored by display name in insertion order; the campaign
/// resolves them against its character and monster lists when the
/// roster is actually used, so deleted members drop out quietly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    /// Stable unique id.
    pub id: EncounterId,
    /// Display name, unique case-insensitively among encounters.
    pub name: String,
    /// Member names in the order they will be dealt to.
    pub members: Vec<String>,
}

impl Encounter {
    /// Create an empty encounter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EncounterId::new(),
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member. Returns false if already present
    /// (case-insensitive).
    pub fn add_member(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let lower = name.to_lowercase();
        if self.members.iter().any(|m| m.to_lowercase() == lower) {
            return false;
        }
        self.members.push(name);
        true
    }

    /// Remove a member by name. Returns true if found.
    pub fn remove_member(&mut self, name: &str) -> bool {
        let lower = name.to_lowercase();
        let before = self.members.len();
        self.members.retain(|m| m.to_lowercase() != lower);
        self.members.len() < before
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
