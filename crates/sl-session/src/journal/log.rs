//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Session Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::InitiativeDealt {
                    encounter,
                    order,
                    skipped,
                    ..
                } => {
                    match encounter {
                        Some(name) => out.push_str(&format!("## Initiative: {name}\n\n")),
                        None => out.push_str("## Initiative\n\n"),
                    }
                    for (i, line) in order.iter().enumerate() {
                        out.push_str(&format!("{}. {line}\n", i + 1));
                    }
                    if !skipped.is_empty() {
                        out.push_str(&format!(
                            "\n*No cards left for*: {}\n",
                            skipped.join(", ")
                        ));
                    }
                    out.push('\n');
                }
                JournalEntry::CardDrawn {
                    participant, card, ..
                } => {
                    match card {
                        Some(card) => out.push_str(&format!(
                            "**Card** ({participant}): {card}\n\n"
                        )),
                        None => out.push_str(&format!(
                            "**Card** ({participant}): the deck was empty\n\n"
                        )),
                    };
                }
                JournalEntry::TurnAdvanced {
                    participant,
                    card,
                    round,
                    ..
                } => {
                    out.push_str(&format!(
                        "**Turn** (round {round}): {participant} ({card})\n\n"
                    ));
                }
                JournalEntry::EncounterEnded { rounds, .. } => {
                    out.push_str(&format!(
                        "*Encounter ended after {rounds} round(s); deck reset.*\n\n"
                    ));
                }
                JournalEntry::DiceRolled {
                    expression,
                    values,
                    total,
                    ..
                } => {
                    let vals: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                    out.push_str(&format!(
                        "**Roll** {expression}: [{}] = {total}\n\n",
                        vals.join(", ")
                    ));
                }
                JournalEntry::BennyGiven {
                    participant,
                    count,
                    bank,
                    ..
                } => {
                    out.push_str(&format!(
                        "**Benny** to {participant} (x{count}, bank {bank})\n\n"
                    ));
                }
                JournalEntry::BennySpent {
                    participant,
                    count,
                    bank,
                    ..
                } => {
                    out.push_str(&format!(
                        "**Benny** spent by {participant} (x{count}, bank {bank})\n\n"
                    ));
                }
                JournalEntry::Purchase {
                    character,
                    item,
                    quantity,
                    paid,
                    ..
                } => {
                    out.push_str(&format!(
                        "**Purchase** ({character}): {quantity}x {item} for {paid}\n\n"
                    ));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Session Journal\n===============\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::InitiativeDealt {
                    encounter,
                    order,
                    skipped,
                    ..
                } => {
                    match encounter {
                        Some(name) => out.push_str(&format!("--- Initiative: {name} ---\n")),
                        None => out.push_str("--- Initiative ---\n"),
                    }
                    for (i, line) in order.iter().enumerate() {
                        out.push_str(&format!("  {}. {line}\n", i + 1));
                    }
                    if !skipped.is_empty() {
                        out.push_str(&format!("  No cards left for: {}\n", skipped.join(", ")));
                    }
                    out.push('\n');
                }
                JournalEntry::CardDrawn {
                    participant, card, ..
                } => {
                    match card {
                        Some(card) => {
                            out.push_str(&format!("Card ({participant}): {card}\n\n"));
                        }
                        None => {
                            out.push_str(&format!(
                                "Card ({participant}): the deck was empty\n\n"
                            ));
                        }
                    };
                }
                JournalEntry::TurnAdvanced {
                    participant,
                    card,
                    round,
                    ..
                } => {
                    out.push_str(&format!(
                        "Turn (round {round}): {participant} ({card})\n\n"
                    ));
                }
                JournalEntry::EncounterEnded { rounds, .. } => {
                    out.push_str(&format!(
                        "Encounter ended after {rounds} round(s); deck reset.\n\n"
                    ));
                }
                JournalEntry::DiceRolled {
                    expression,
                    values,
                    total,
                    ..
                } => {
                    let vals: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                    out.push_str(&format!(
                        "Roll {expression}: [{}] = {total}\n\n",
                        vals.join(", ")
                    ));
                }
                JournalEntry::BennyGiven {
                    participant,
                    count,
                    bank,
                    ..
                } => {
                    out.push_str(&format!(
                        "Benny to {participant} (x{count}, bank {bank})\n\n"
                    ));
                }
                JournalEntry::BennySpent {
                    participant,
                    count,
                    bank,
                    ..
                } => {
                    out.push_str(&format!(
                        "Benny spent by {participant} (x{count}, bank {bank})\n\n"
                    ));
                }
                JournalEntry::Purchase {
                    character,
                    item,
                    quantity,
                    paid,
                    ..
                } => {
                    out.push_str(&format!(
                        "Purchase ({character}): {quantity}x {item} for {paid}\n\n"
                    ));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("Note: {text}\n\n"));
                }
            }
        }
        out
    }
}
