//! Per-participant dealt-card tracking.

use std::collections::HashMap;

use super::card::Card;

/// Cards dealt to each participant in the current round.
///
/// A participant's hand is created on their first deal and is
/// append-only until the deck is reset. Participant ids are opaque
/// strings; the deck does not know about the campaign.
#[derive(Debug, Clone, Default)]
pub struct Hands {
    dealt: HashMap<String, Vec<Card>>,
}

impl Hands {
    /// Create an empty hand store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to a participant's hand.
    pub fn add(&mut self, participant: impl Into<String>, card: Card) {
        self.dealt.entry(participant.into()).or_default().push(card);
    }

    /// The cards dealt to one participant, in deal order.
    pub fn cards(&self, participant: &str) -> Option<&[Card]> {
        self.dealt.get(participant).map(Vec::as_slice)
    }

    /// Drop every hand.
    pub fn clear(&mut self) {
        self.dealt.clear();
    }

    /// Whether no cards have been dealt to anyone.
    pub fn is_empty(&self) -> bool {
        self.dealt.is_empty()
    }

    /// Number of participants holding at least one card.
    pub fn participant_count(&self) -> usize {
        self.dealt.len()
    }

    /// Total number of cards dealt across all hands.
    pub fn dealt_count(&self) -> usize {
        self.dealt.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::card::{Rank, Suit};

    #[test]
    fn hands_accumulate_in_deal_order() {
        let mut hands = Hands::new();
        let first = Card::Suited {
            rank: Rank::Four,
            suit: Suit::Hearts,
        };
        let second = Card::Joker;
        hands.add("Alice", first);
        hands.add("Alice", second);

        assert_eq!(hands.cards("Alice"), Some([first, second].as_slice()));
        assert_eq!(hands.participant_count(), 1);
        assert_eq!(hands.dealt_count(), 2);
    }

    #[test]
    fn unknown_participant_has_no_hand() {
        let hands = Hands::new();
        assert!(hands.cards("Nobody").is_none());
        assert!(hands.is_empty());
    }

    #[test]
    fn clear_drops_all_hands() {
        let mut hands = Hands::new();
        hands.add("Alice", Card::Joker);
        hands.add("Bob", Card::Joker);
        hands.clear();
        assert!(hands.is_empty());
        assert_eq!(hands.dealt_count(), 0);
        assert!(hands.cards("Alice").is_none());
    }
}
