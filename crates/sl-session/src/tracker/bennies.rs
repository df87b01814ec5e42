//! Benny tracking with bank-pool accounting.
//!
//! Bennies only move between the shared bank and participant balances,
//! so the total across the whole pool never changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// The benny economy for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BennyPool {
    bank: u32,
    balances: BTreeMap<String, u32>,
}

impl BennyPool {
    /// Create a pool with `bank` bennies available to hand out.
    pub fn new(bank: u32) -> Self {
        Self {
            bank,
            balances: BTreeMap::new(),
        }
    }

    /// Move `count` bennies from the bank to a participant.
    pub fn give(&mut self, participant: impl Into<String>, count: u32) -> SessionResult<()> {
        if count > self.bank {
            return Err(SessionError::BankShort {
                requested: count,
                available: self.bank,
            });
        }
        let participant = participant.into();
        let key = self.find_key(&participant).unwrap_or(participant);
        self.bank -= count;
        *self.balances.entry(key).or_insert(0) += count;
        Ok(())
    }

    /// A participant spends `count` bennies back into the bank.
    pub fn spend(&mut self, participant: &str, count: u32) -> SessionResult<()> {
        let key = match self.find_key(participant) {
            Some(key) => key,
            None => participant.to_string(),
        };
        let balance = self.balances.get(&key).copied().unwrap_or(0);
        if count > balance {
            return Err(SessionError::BennyShort {
                who: key,
                requested: count,
                available: balance,
            });
        }
        if let Some(b) = self.balances.get_mut(&key) {
            *b -= count;
        }
        self.bank += count;
        Ok(())
    }

    /// A participant's balance, matched case-insensitively.
    pub fn balance(&self, participant: &str) -> u32 {
        let lower = participant.to_lowercase();
        self.balances
            .iter()
            .find(|(name, _)| name.to_lowercase() == lower)
            .map_or(0, |(_, balance)| *balance)
    }

    /// Bennies left in the bank.
    pub fn bank(&self) -> u32 {
        self.bank
    }

    /// Every nonzero balance.
    pub fn balances(&self) -> Vec<(&str, u32)> {
        self.balances
            .iter()
            .filter(|(_, balance)| **balance > 0)
            .map(|(name, balance)| (name.as_str(), *balance))
            .collect()
    }

    fn find_key(&self, participant: &str) -> Option<String> {
        let lower = participant.to_lowercase();
        self.balances
            .keys()
            .find(|name| name.to_lowercase() == lower)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn give_moves_from_bank() {
        let mut pool = BennyPool::new(20);
        pool.give("Alice", 2).unwrap();
        assert_eq!(pool.balance("Alice"), 2);
        assert_eq!(pool.bank(), 18);
    }

    #[test]
    fn give_over_bank_fails() {
        let mut pool = BennyPool::new(1);
        let err = pool.give("Alice", 2).unwrap_err();
        assert!(matches!(
            err,
            SessionError::BankShort {
                requested: 2,
                available: 1,
            }
        ));
        assert_eq!(pool.bank(), 1);
    }

    #[test]
    fn spend_returns_to_bank() {
        let mut pool = BennyPool::new(20);
        pool.give("Alice", 3).unwrap();
        pool.spend("alice", 2).unwrap();
        assert_eq!(pool.balance("Alice"), 1);
        assert_eq!(pool.bank(), 19);
    }

    #[test]
    fn overspend_fails_with_canonical_name() {
        let mut pool = BennyPool::new(20);
        pool.give("Alice", 1).unwrap();
        let err = pool.spend("ALICE", 2).unwrap_err();
        match err {
            SessionError::BennyShort {
                who,
                requested,
                available,
            } => {
                assert_eq!(who, "Alice");
                assert_eq!(requested, 2);
                assert_eq!(available, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn total_is_conserved() {
        let mut pool = BennyPool::new(20);
        pool.give("Alice", 5).unwrap();
        pool.give("Bob", 3).unwrap();
        pool.spend("Alice", 2).unwrap();
        pool.give("Alice", 1).unwrap();
        let held: u32 = pool.balances().iter().map(|(_, b)| b).sum();
        assert_eq!(pool.bank() + held, 20);
    }

    #[test]
    fn balances_skip_empty_purses() {
        let mut pool = BennyPool::new(20);
        pool.give("Alice", 1).unwrap();
        pool.spend("Alice", 1).unwrap();
        assert!(pool.balances().is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut pool = BennyPool::new(20);
        pool.give("Alice", 4).unwrap();
        let json = serde_json::to_string(&pool).unwrap();
        let pool2: BennyPool = serde_json::from_str(&json).unwrap();
        assert_eq!(pool2.balance("Alice"), 4);
        assert_eq!(pool2.bank(), 16);
    }
}
