//! Player characters and typed updates.
//!
//! Attributes, skills, and equipment are real maps in memory; they are
//! only flattened to JSON at the storage boundary. Changes arrive as a
//! `CharacterUpdate`, a typed patch built and validated before any
//! field is touched.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(Uuid);

impl CharacterId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player character in the campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Stable unique id.
    pub id: CharacterId,
    /// Display name, unique case-insensitively within the campaign.
    pub name: String,
    /// Current health.
    pub health: i64,
    /// Money on hand.
    pub money: i64,
    /// Named attributes (e.g. "Strength" -> "d8").
    pub attributes: BTreeMap<String, String>,
    /// Named skills (e.g. "Fighting" -> "d6").
    pub skills: BTreeMap<String, String>,
    /// Carried items and their quantities.
    pub equipment: BTreeMap<String, u32>,
    /// When the character was created.
    pub created_at: DateTime<Utc>,
    /// When the character was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Default starting health.
    pub const DEFAULT_HEALTH: i64 = 10;

    /// Create a character with default health and an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CharacterId::new(),
            name: name.into(),
            health: Self::DEFAULT_HEALTH,
            money: 0,
            attributes: BTreeMap::new(),
            skills: BTreeMap::new(),
            equipment: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a validated update into the sheet.
    ///
    /// Map entries are upserts; an equipment quantity of zero removes
    /// the item. Bumps `updated_at`.
    pub fn apply(&mut self, update: CharacterUpdate) {
        if let Some(health) = update.health {
            self.health = health;
        }
        if let Some(money) = update.money {
            self.money = money;
        }
        for (key, value) in update.attributes {
            self.attributes.insert(key, value);
        }
        for (key, value) in update.skills {
            self.skills.insert(key, value);
        }
        for (item, quantity) in update.equipment {
            if quantity == 0 {
                self.equipment.remove(&item);
            } else {
                self.equipment.insert(item, quantity);
            }
        }
        self.updated_at = Utc::now();
    }

    /// Add `quantity` of an item on top of what is already carried.
    pub fn add_equipment(&mut self, item: impl Into<String>, quantity: u32) {
        let slot = self.equipment.entry(item.into()).or_insert(0);
        *slot = slot.saturating_add(quantity);
        self.updated_at = Utc::now();
    }

    /// Whether the character is still standing.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// A typed patch against one character.
///
/// Every field is optional; empty maps mean "no change".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterUpdate {
    /// New health, if changing.
    pub health: Option<i64>,
    /// New money total, if changing.
    pub money: Option<i64>,
    /// Attributes to upsert.
    pub attributes: BTreeMap<String, String>,
    /// Skills to upsert.
    pub skills: BTreeMap<String, String>,
    /// Equipment quantities to set (zero removes the item).
    pub equipment: BTreeMap<String, u32>,
}

impl CharacterUpdate {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.health.is_none()
            && self.money.is_none()
            && self.attributes.is_empty()
            && self.skills.is_empty()
            && self.equipment.is_empty()
    }
}
