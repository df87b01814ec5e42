//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A new initiative round was dealt.
    InitiativeDealt {
        /// Encounter name, if dealt to a named encounter.
        encounter: Option<String>,
        /// Ranked "participant: card" lines, best card first.
        order: Vec<String>,
        /// Participants the deck ran out of cards for.
        skipped: Vec<String>,
        /// When the deal happened.
        timestamp: DateTime<Utc>,
    },
    /// An extra card dealt outside an initiative round.
    CardDrawn {
        /// Who drew.
        participant: String,
        /// The card, or `None` when the deck was empty.
        card: Option<String>,
        /// When the draw happened.
        timestamp: DateTime<Utc>,
    },
    /// The turn moved to the next participant.
    TurnAdvanced {
        /// Whose turn it now is.
        participant: String,
        /// The card that placed them.
        card: String,
        /// Round number after the advance.
        round: u32,
        /// When the turn advanced.
        timestamp: DateTime<Utc>,
    },
    /// The encounter was ended and the deck reset.
    EncounterEnded {
        /// How many rounds were played.
        rounds: u32,
        /// When it ended.
        timestamp: DateTime<Utc>,
    },
    /// A dice expression was rolled.
    DiceRolled {
        /// The normalized expression.
        expression: String,
        /// Individual die values.
        values: Vec<u32>,
        /// Final total including any modifier.
        total: i64,
        /// When the roll happened.
        timestamp: DateTime<Utc>,
    },
    /// Bennies handed out from the bank.
    BennyGiven {
        /// Who received them.
        participant: String,
        /// How many.
        count: u32,
        /// Bank level afterwards.
        bank: u32,
        /// When they were given.
        timestamp: DateTime<Utc>,
    },
    /// Bennies spent back into the bank.
    BennySpent {
        /// Who spent them.
        participant: String,
        /// How many.
        count: u32,
        /// Bank level afterwards.
        bank: u32,
        /// When they were spent.
        timestamp: DateTime<Utc>,
    },
    /// A character bought from the store.
    Purchase {
        /// Who bought.
        character: String,
        /// What they bought.
        item: String,
        /// How many.
        quantity: u32,
        /// Total price paid.
        paid: i64,
        /// When the purchase happened.
        timestamp: DateTime<Utc>,
    },
    /// A game-master note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}
