//! Action deck, initiative, and dice mechanics for Spielleiter.
//!
//! The deck is the Savage Worlds style 54-card action deck (13 ranks x
//! 4 suits plus two jokers): initiative is dealt one card per
//! participant and ranked card-high first, with suits breaking ties
//! and jokers on top. Also provides `NdS+M` dice expressions.

pub mod deck;
pub mod dice;
pub mod error;
pub mod initiative;

pub use deck::{ActionDeck, Card, Hands, Rank, Suit};
pub use dice::{RollExpression, RollOutcome};
pub use error::{MechError, MechResult};
pub use initiative::{DealReport, TurnEntry, TurnOrder};
