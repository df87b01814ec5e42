//! Initiative dealing and turn cycling.
//!
//! `TurnOrder` ranks participants by the card each one drew for the
//! round (highest first) and walks a cursor through them. The order is
//! rebuilt from scratch on every deal; ending the encounter empties it
//! and hands the deck back for a reset.

use serde::{Deserialize, Serialize};

use crate::deck::{ActionDeck, Card};
use crate::error::{MechError, MechResult};

/// One participant's slot in the initiative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEntry {
    /// Participant id (opaque to the deck engine).
    pub participant: String,
    /// The card that placed them here.
    pub card: Card,
}

/// Outcome of dealing a round of initiative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealReport {
    /// The ranked order, best card first.
    pub order: Vec<TurnEntry>,
    /// Participants the deck ran out of cards for, in input order.
    pub skipped: Vec<String>,
}

/// The turn sequence for one encounter.
///
/// Lifecycle: idle until `deal_initiative`, then cycling via
/// `next_turn` (the cursor wraps and bumps the round counter), until
/// `end` clears everything back to idle.
#[derive(Debug, Clone, Default)]
pub struct TurnOrder {
    entries: Vec<TurnEntry>,
    cursor: usize,
    round: u32,
}

impl TurnOrder {
    /// Create an idle turn order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal one card to each participant and rank them.
    ///
    /// Ranking is descending by card; equal cards (the two jokers)
    /// keep their input order. Participants the deck cannot serve are
    /// reported as skipped and left out of the order. The cursor lands
    /// on the round leader.
    pub fn deal_initiative(&mut self, deck: &mut ActionDeck, participants: &[String]) -> DealReport {
        self.entries.clear();
        let mut skipped = Vec::new();

        for name in participants {
            match deck.deal(name.clone()) {
                Some(card) => self.entries.push(TurnEntry {
                    participant: name.clone(),
                    card,
                }),
                None => skipped.push(name.clone()),
            }
        }

        self.entries.sort_by(|a, b| b.card.cmp(&a.card));
        self.cursor = 0;
        self.round = if self.entries.is_empty() { 0 } else { 1 };

        DealReport {
            order: self.entries.clone(),
            skipped,
        }
    }

    /// The participant whose turn it is.
    pub fn current(&self) -> MechResult<&TurnEntry> {
        if self.entries.is_empty() {
            return Err(MechError::EmptyOrder);
        }
        Ok(&self.entries[self.cursor])
    }

    /// Advance the cursor and return the new current participant.
    ///
    /// Wrapping past the last participant starts a new round.
    pub fn next_turn(&mut self) -> MechResult<&TurnEntry> {
        if self.entries.is_empty() {
            return Err(MechError::EmptyOrder);
        }
        self.cursor += 1;
        if self.cursor >= self.entries.len() {
            self.cursor = 0;
            self.round += 1;
        }
        Ok(&self.entries[self.cursor])
    }

    /// End the encounter: clear the order and go back to idle.
    ///
    /// The deck reset that goes with it is the caller's job, since the
    /// session owns both.
    pub fn end(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.round = 0;
    }

    /// The ranked entries, best card first.
    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    /// Index of the current turn within `entries`.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Current round number (0 while idle, 1-based once dealt).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether an encounter is in progress.
    pub fn is_active(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of ranked participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the order is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn setup(seed: u64) -> (ActionDeck, TurnOrder) {
        let mut rng = StdRng::seed_from_u64(seed);
        (ActionDeck::new(&mut rng), TurnOrder::new())
    }

    #[test]
    fn deal_ranks_descending() {
        let (mut deck, mut order) = setup(42);
        let report = order.deal_initiative(&mut deck, &names(&["Alice", "Bob", "Carol"]));

        assert_eq!(report.order.len(), 3);
        assert!(report.skipped.is_empty());
        for pair in report.order.windows(2) {
            assert!(pair[0].card >= pair[1].card);
        }

        // Cursor starts on the leader, round 1.
        assert_eq!(order.round(), 1);
        assert_eq!(order.position(), 0);
        assert_eq!(
            order.current().unwrap().participant,
            report.order[0].participant
        );
    }

    #[test]
    fn next_turn_visits_everyone_once_per_round() {
        let (mut deck, mut order) = setup(42);
        let roster = names(&["Alice", "Bob", "Carol"]);
        order.deal_initiative(&mut deck, &roster);

        let mut seen = vec![order.current().unwrap().participant.clone()];
        // Two advances stay in round 1, the third wraps.
        for _ in 0..2 {
            seen.push(order.next_turn().unwrap().participant.clone());
            assert_eq!(order.round(), 1);
        }
        let wrapped = order.next_turn().unwrap().participant.clone();

        seen.sort();
        let mut expected = roster.clone();
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(order.round(), 2);
        assert_eq!(wrapped, order.entries()[0].participant);
    }

    #[test]
    fn next_turn_without_deal_is_an_error() {
        let mut order = TurnOrder::new();
        assert!(matches!(order.next_turn(), Err(MechError::EmptyOrder)));
        assert!(matches!(order.current(), Err(MechError::EmptyOrder)));
    }

    #[test]
    fn exhausted_deck_skips_participants() {
        let (mut deck, mut order) = setup(13);
        // Burn the deck down to 2 cards.
        for i in 0..52 {
            deck.deal(format!("burn{i}"));
        }

        let report = order.deal_initiative(&mut deck, &names(&["A", "B", "C"]));
        assert_eq!(report.order.len(), 2);
        assert_eq!(report.skipped, vec!["C".to_string()]);
        assert_eq!(order.len(), 2);
        assert!(order.is_active());
    }

    #[test]
    fn fully_exhausted_deck_deals_nobody() {
        let (mut deck, mut order) = setup(13);
        for i in 0..54 {
            deck.deal(format!("burn{i}"));
        }

        let report = order.deal_initiative(&mut deck, &names(&["A", "B"]));
        assert!(report.order.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert!(!order.is_active());
        assert_eq!(order.round(), 0);
    }

    #[test]
    fn joker_tie_keeps_input_order() {
        // Deal the whole deck to 54 participants; the two jokers rank
        // equal, so the earlier input index must come first.
        let (mut deck, mut order) = setup(99);
        let roster: Vec<String> = (0..54).map(|i| format!("p{i:02}")).collect();
        let report = order.deal_initiative(&mut deck, &roster);
        assert!(report.skipped.is_empty());

        let jokers: Vec<&TurnEntry> = report
            .order
            .iter()
            .filter(|e| e.card.is_joker())
            .collect();
        assert_eq!(jokers.len(), 2);
        assert_eq!(report.order[0].card, Card::Joker);
        assert_eq!(report.order[1].card, Card::Joker);

        let first_input = roster
            .iter()
            .position(|n| *n == jokers[0].participant)
            .unwrap();
        let second_input = roster
            .iter()
            .position(|n| *n == jokers[1].participant)
            .unwrap();
        assert!(first_input < second_input);
    }

    #[test]
    fn redeal_replaces_the_order() {
        let (mut deck, mut order) = setup(1);
        order.deal_initiative(&mut deck, &names(&["Alice", "Bob"]));
        order.next_turn().unwrap();

        let report = order.deal_initiative(&mut deck, &names(&["Carol"]));
        assert_eq!(report.order.len(), 1);
        assert_eq!(order.len(), 1);
        assert_eq!(order.round(), 1);
        assert_eq!(order.current().unwrap().participant, "Carol");
    }

    #[test]
    fn end_returns_to_idle() {
        let (mut deck, mut order) = setup(8);
        order.deal_initiative(&mut deck, &names(&["Alice", "Bob"]));
        assert!(order.is_active());

        order.end();
        assert!(!order.is_active());
        assert_eq!(order.round(), 0);
        assert!(order.is_empty());
        assert!(matches!(order.current(), Err(MechError::EmptyOrder)));
    }
}
