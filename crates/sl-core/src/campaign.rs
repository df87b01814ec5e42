//! The campaign: everything a table persists between sessions.
//!
//! Characters, monsters, encounters, and the store live in plain Vecs,
//! looked up by name case-insensitively. JSON enters the picture only
//! in [`Campaign::save`] and [`Campaign::load`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterUpdate};
use crate::encounter::Encounter;
use crate::error::{CoreError, CoreResult};
use crate::monster::Monster;
use crate::store::Store;

/// Persistent campaign state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign display name.
    pub name: String,
    characters: Vec<Character>,
    monsters: Vec<Monster>,
    encounters: Vec<Encounter>,
    /// The shared item catalog.
    pub store: Store,
}

impl Campaign {
    /// Create an empty campaign.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            characters: Vec::new(),
            monsters: Vec::new(),
            encounters: Vec::new(),
            store: Store::new(),
        }
    }

    // --- characters ---

    /// Create a character. Names are unique case-insensitively.
    pub fn create_character(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        if self.character(&name).is_some() {
            return Err(CoreError::DuplicateName {
                kind: "character",
                name,
            });
        }
        self.characters.push(Character::new(name));
        Ok(())
    }

    /// Look up a character by name.
    pub fn character(&self, name: &str) -> Option<&Character> {
        let lower = name.to_lowercase();
        self.characters
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
    }

    /// Mutable character lookup.
    pub fn character_mut(&mut self, name: &str) -> Option<&mut Character> {
        let lower = name.to_lowercase();
        self.characters
            .iter_mut()
            .find(|c| c.name.to_lowercase() == lower)
    }

    /// Merge a typed update into a character's sheet.
    pub fn update_character(
        &mut self,
        name: &str,
        update: CharacterUpdate,
    ) -> CoreResult<&Character> {
        let c = self
            .character_mut(name)
            .ok_or_else(|| CoreError::UnknownCharacter(name.to_string()))?;
        c.apply(update);
        Ok(&*c)
    }

    /// Delete a character, returning it.
    pub fn remove_character(&mut self, name: &str) -> CoreResult<Character> {
        let lower = name.to_lowercase();
        let index = self
            .characters
            .iter()
            .position(|c| c.name.to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownCharacter(name.to_string()))?;
        Ok(self.characters.remove(index))
    }

    /// All characters in creation order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    // --- monsters ---

    /// Create a monster. Names are unique case-insensitively.
    pub fn create_monster(&mut self, name: impl Into<String>, health: i64) -> CoreResult<()> {
        let name = name.into();
        if self.monster(&name).is_some() {
            return Err(CoreError::DuplicateName {
                kind: "monster",
                name,
            });
        }
        self.monsters.push(Monster::new(name, health));
        Ok(())
    }

    /// Look up a monster by name.
    pub fn monster(&self, name: &str) -> Option<&Monster> {
        let lower = name.to_lowercase();
        self.monsters.iter().find(|m| m.name.to_lowercase() == lower)
    }

    /// Mutable monster lookup.
    pub fn monster_mut(&mut self, name: &str) -> Option<&mut Monster> {
        let lower = name.to_lowercase();
        self.monsters
            .iter_mut()
            .find(|m| m.name.to_lowercase() == lower)
    }

    /// Apply a health delta to a monster, clamping at zero.
    pub fn adjust_monster_health(&mut self, name: &str, delta: i64) -> CoreResult<&Monster> {
        let m = self
            .monster_mut(name)
            .ok_or_else(|| CoreError::UnknownMonster(name.to_string()))?;
        m.adjust_health(delta);
        Ok(&*m)
    }

    /// Delete a monster, returning it.
    pub fn remove_monster(&mut self, name: &str) -> CoreResult<Monster> {
        let lower = name.to_lowercase();
        let index = self
            .monsters
            .iter()
            .position(|m| m.name.to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownMonster(name.to_string()))?;
        Ok(self.monsters.remove(index))
    }

    /// All monsters in creation order.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    // --- membership ---

    /// Resolve a name against characters first, then monsters,
    /// returning the canonical (stored) spelling.
    pub fn member_name(&self, name: &str) -> CoreResult<String> {
        if let Some(c) = self.character(name) {
            return Ok(c.name.clone());
        }
        if let Some(m) = self.monster(name) {
            return Ok(m.name.clone());
        }
        Err(CoreError::UnknownMember(name.to_string()))
    }

    // --- encounters ---

    /// Create an encounter. Names are unique case-insensitively.
    pub fn create_encounter(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        if self.encounter(&name).is_some() {
            return Err(CoreError::DuplicateName {
                kind: "encounter",
                name,
            });
        }
        self.encounters.push(Encounter::new(name));
        Ok(())
    }

    /// Look up an encounter by name.
    pub fn encounter(&self, name: &str) -> Option<&Encounter> {
        let lower = name.to_lowercase();
        self.encounters
            .iter()
            .find(|e| e.name.to_lowercase() == lower)
    }

    /// Add a character or monster to an encounter by name.
    ///
    /// The member must exist in the campaign; it is stored under its
    /// canonical spelling. Returns false if it was already a member.
    pub fn add_encounter_member(&mut self, encounter: &str, member: &str) -> CoreResult<bool> {
        let canonical = self.member_name(member)?;
        let lower = encounter.to_lowercase();
        let e = self
            .encounters
            .iter_mut()
            .find(|e| e.name.to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownEncounter(encounter.to_string()))?;
        Ok(e.add_member(canonical))
    }

    /// Remove a member from an encounter. Returns false if absent.
    pub fn remove_encounter_member(&mut self, encounter: &str, member: &str) -> CoreResult<bool> {
        let lower = encounter.to_lowercase();
        let e = self
            .encounters
            .iter_mut()
            .find(|e| e.name.to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownEncounter(encounter.to_string()))?;
        Ok(e.remove_member(member))
    }

    /// Delete an encounter, returning it.
    pub fn remove_encounter(&mut self, name: &str) -> CoreResult<Encounter> {
        let lower = name.to_lowercase();
        let index = self
            .encounters
            .iter()
            .position(|e| e.name.to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownEncounter(name.to_string()))?;
        Ok(self.encounters.remove(index))
    }

    /// All encounters in creation order.
    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    /// The initiative roster for an encounter: member names in roster
    /// order, silently dropping any member deleted since it was added.
    pub fn roster(&self, encounter: &str) -> CoreResult<Vec<String>> {
        let e = self
            .encounter(encounter)
            .ok_or_else(|| CoreError::UnknownEncounter(encounter.to_string()))?;
        Ok(e.members
            .iter()
            .filter(|m| self.member_name(m).is_ok())
            .cloned()
            .collect())
    }

    /// The fallback roster: every living character, in creation order.
    pub fn default_roster(&self) -> Vec<String> {
        self.characters
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| c.name.clone())
            .collect()
    }

    // --- economy ---

    /// Buy `quantity` of a store item for a character.
    ///
    /// Checks funds for the full price, debits the character's money,
    /// and stacks the item onto their equipment. Returns the total
    /// price paid.
    pub fn buy(&mut self, character: &str, item: &str, quantity: u32) -> CoreResult<i64> {
        let item = self
            .store
            .find(item)
            .ok_or_else(|| CoreError::UnknownItem(item.to_string()))?
            .clone();
        // A total past i64::MAX is never affordable; it is reported saturated.
        let total = item.price.checked_mul(i64::from(quantity));
        let c = self
            .character_mut(character)
            .ok_or_else(|| CoreError::UnknownCharacter(character.to_string()))?;
        match total {
            Some(total) if c.money >= total => {
                c.money -= total;
                c.add_equipment(item.name, quantity);
                Ok(total)
            }
            _ => Err(CoreError::InsufficientFunds {
                name: c.name.clone(),
                needed: total.unwrap_or(i64::MAX),
                available: c.money,
            }),
        }
    }

    /// Add money to a character's purse. Returns the new balance.
    pub fn give_money(&mut self, character: &str, amount: i64) -> CoreResult<i64> {
        let c = self
            .character_mut(character)
            .ok_or_else(|| CoreError::UnknownCharacter(character.to_string()))?;
        c.money = c.money.saturating_add(amount);
        Ok(c.money)
    }

    /// Take money from a character's purse. Fails rather than go
    /// negative. Returns the new balance.
    pub fn take_money(&mut self, character: &str, amount: i64) -> CoreResult<i64> {
        let c = self
            .character_mut(character)
            .ok_or_else(|| CoreError::UnknownCharacter(character.to_string()))?;
        if c.money < amount {
            return Err(CoreError::InsufficientFunds {
                name: c.name.clone(),
                needed: amount,
                available: c.money,
            });
        }
        c.money -= amount;
        Ok(c.money)
    }

    // --- persistence ---

    /// Write the campaign to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a campaign back from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> Campaign {
        let mut c = Campaign::new("Test Realm");
        c.create_character("Alice").unwrap();
        c.create_character("Bob").unwrap();
        c.create_monster("Giant Rat", 8).unwrap();
        c
    }

    #[test]
    fn duplicate_character_rejected_case_insensitively() {
        let mut c = campaign();
        let err = c.create_character("ALICE").unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName { kind: "character", .. }));
        assert_eq!(c.characters().len(), 2);
    }

    #[test]
    fn lookup_ignores_case() {
        let c = campaign();
        assert_eq!(c.character("alice").unwrap().name, "Alice");
        assert_eq!(c.monster("giant rat").unwrap().name, "Giant Rat");
    }

    #[test]
    fn remove_character_returns_it() {
        let mut c = campaign();
        let removed = c.remove_character("bob").unwrap();
        assert_eq!(removed.name, "Bob");
        assert!(c.character("Bob").is_none());
        assert!(matches!(
            c.remove_character("Bob").unwrap_err(),
            CoreError::UnknownCharacter(_)
        ));
    }

    #[test]
    fn member_name_prefers_characters() {
        let mut c = campaign();
        c.create_monster("Alice's Shadow", 5).unwrap();
        assert_eq!(c.member_name("ALICE").unwrap(), "Alice");
        assert_eq!(c.member_name("giant rat").unwrap(), "Giant Rat");
        assert!(matches!(
            c.member_name("Carol").unwrap_err(),
            CoreError::UnknownMember(_)
        ));
    }

    #[test]
    fn encounter_members_stored_canonically() {
        let mut c = campaign();
        c.create_encounter("Ambush").unwrap();
        assert!(c.add_encounter_member("ambush", "alice").unwrap());
        assert!(c.add_encounter_member("Ambush", "GIANT RAT").unwrap());
        assert!(!c.add_encounter_member("Ambush", "Alice").unwrap());
        assert_eq!(
            c.encounter("Ambush").unwrap().members,
            vec!["Alice", "Giant Rat"]
        );
    }

    #[test]
    fn unknown_member_rejected() {
        let mut c = campaign();
        c.create_encounter("Ambush").unwrap();
        assert!(matches!(
            c.add_encounter_member("Ambush", "Carol").unwrap_err(),
            CoreError::UnknownMember(_)
        ));
    }

    #[test]
    fn roster_drops_deleted_members() {
        let mut c = campaign();
        c.create_encounter("Ambush").unwrap();
        c.add_encounter_member("Ambush", "Alice").unwrap();
        c.add_encounter_member("Ambush", "Giant Rat").unwrap();
        c.remove_monster("Giant Rat").unwrap();
        assert_eq!(c.roster("Ambush").unwrap(), vec!["Alice"]);
    }

    #[test]
    fn default_roster_is_living_characters() {
        let mut c = campaign();
        c.character_mut("Bob").unwrap().health = 0;
        assert_eq!(c.default_roster(), vec!["Alice"]);
    }

    #[test]
    fn buy_debits_and_stacks_equipment() {
        let mut c = campaign();
        c.store.add("Rope", 5).unwrap();
        c.give_money("Alice", 20).unwrap();
        let paid = c.buy("Alice", "rope", 3).unwrap();
        assert_eq!(paid, 15);
        let alice = c.character("Alice").unwrap();
        assert_eq!(alice.money, 5);
        assert_eq!(alice.equipment.get("Rope"), Some(&3));
    }

    #[test]
    fn buy_rejects_insufficient_funds() {
        let mut c = campaign();
        c.store.add("Rope", 5).unwrap();
        c.give_money("Alice", 4).unwrap();
        let err = c.buy("Alice", "Rope", 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientFunds {
                needed: 5,
                available: 4,
                ..
            }
        ));
        assert_eq!(c.character("Alice").unwrap().money, 4);
        assert!(c.character("Alice").unwrap().equipment.is_empty());
    }

    #[test]
    fn buy_rejects_total_past_i64() {
        let mut c = campaign();
        c.store.add("Moon", i64::MAX).unwrap();
        c.give_money("Alice", 20).unwrap();
        let err = c.buy("Alice", "Moon", 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientFunds {
                needed: i64::MAX,
                available: 20,
                ..
            }
        ));
        assert_eq!(c.character("Alice").unwrap().money, 20);
        assert!(c.character("Alice").unwrap().equipment.is_empty());
    }

    #[test]
    fn take_money_never_goes_negative() {
        let mut c = campaign();
        c.give_money("Alice", 10).unwrap();
        assert_eq!(c.take_money("Alice", 4).unwrap(), 6);
        assert!(c.take_money("Alice", 7).is_err());
        assert_eq!(c.character("Alice").unwrap().money, 6);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut c = campaign();
        c.store.add("Rope", 5).unwrap();
        c.create_encounter("Ambush").unwrap();
        c.add_encounter_member("Ambush", "Alice").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign.json");
        c.save(&path).unwrap();

        let back = Campaign::load(&path).unwrap();
        assert_eq!(back.name, "Test Realm");
        assert_eq!(back.characters().len(), 2);
        assert_eq!(back.monsters().len(), 1);
        assert_eq!(back.encounters()[0].members, vec!["Alice"]);
        assert_eq!(back.store.find("Rope").unwrap().price, 5);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Campaign::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
