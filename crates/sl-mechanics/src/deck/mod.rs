//! The 54-card action deck.
//!
//! One deck lives for a whole session. `reset` rebuilds the full set
//! (13 ranks x 4 suits plus two jokers), shuffles once, and clears all
//! hands; `deal` then consumes cards front to back in the shuffled
//! order. An exhausted deck is not an error: `deal` returns `None` so
//! callers can finish a batch and report the shortfall.

pub mod card;
pub mod hands;

pub use card::{Card, Rank, Suit};
pub use hands::Hands;

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{MechError, MechResult};

/// The shuffled action deck plus the hands dealt from it.
#[derive(Debug, Clone)]
pub struct ActionDeck {
    cards: VecDeque<Card>,
    hands: Hands,
}

impl ActionDeck {
    /// Cards in a full deck: 52 suited plus two jokers.
    pub const FULL_SIZE: usize = 54;

    /// Create a freshly shuffled deck with no hands dealt.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut deck = Self {
            cards: VecDeque::new(),
            hands: Hands::new(),
        };
        deck.reset(rng);
        deck
    }

    /// Rebuild all 54 cards, shuffle, and clear every hand.
    pub fn reset(&mut self, rng: &mut StdRng) {
        let mut cards = full_set();
        cards.shuffle(rng);
        self.cards = VecDeque::from(cards);
        self.hands.clear();
    }

    /// Re-randomize only the undealt cards. Hands are untouched.
    pub fn shuffle_remaining(&mut self, rng: &mut StdRng) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Deal the front card to a participant.
    ///
    /// Returns `None` when the deck is exhausted; the participant's
    /// hand is only touched when a card was actually drawn.
    pub fn deal(&mut self, participant: impl Into<String>) -> Option<Card> {
        let card = self.cards.pop_front()?;
        self.hands.add(participant, card);
        Some(card)
    }

    /// Number of undealt cards.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards dealt to one participant this round.
    pub fn hand(&self, participant: &str) -> MechResult<&[Card]> {
        self.hands
            .cards(participant)
            .ok_or_else(|| MechError::UnknownParticipant(participant.to_string()))
    }

    /// All hands dealt since the last reset.
    pub fn hands(&self) -> &Hands {
        &self.hands
    }
}

/// The full 54-card set, unshuffled.
fn full_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(ActionDeck::FULL_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::Suited { rank, suit });
        }
    }
    cards.push(Card::Joker);
    cards.push(Card::Joker);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn fresh_deck_has_54_cards() {
        let mut rng = rng(42);
        let deck = ActionDeck::new(&mut rng);
        assert_eq!(deck.remaining(), ActionDeck::FULL_SIZE);
        assert!(deck.hands().is_empty());
    }

    #[test]
    fn full_set_composition() {
        let cards = full_set();
        assert_eq!(cards.len(), 54);
        assert_eq!(cards.iter().filter(|c| c.is_joker()).count(), 2);

        // The 52 suited cards are all distinct.
        let mut suited: Vec<Card> = cards.iter().copied().filter(|c| !c.is_joker()).collect();
        suited.sort();
        suited.dedup();
        assert_eq!(suited.len(), 52);
    }

    #[test]
    fn deal_consumes_front_to_back() {
        let mut rng_a = rng(7);
        let mut rng_b = rng(7);
        let mut deck = ActionDeck::new(&mut rng_a);
        let mut reference = ActionDeck::new(&mut rng_b);

        // Same seed, same consumption order regardless of who draws.
        for i in 0..10 {
            let a = deck.deal(format!("p{i}"));
            let b = reference.deal("everyone");
            assert_eq!(a, b);
        }
        assert_eq!(deck.remaining(), 44);
    }

    #[test]
    fn deal_55_returns_none_without_breaking_the_deck() {
        let mut rng = rng(3);
        let mut deck = ActionDeck::new(&mut rng);
        for _ in 0..54 {
            assert!(deck.deal("Alice").is_some());
        }
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal("Alice").is_none());
        assert!(deck.deal("Bob").is_none());

        // A failed deal creates no hand.
        assert!(deck.hand("Bob").is_err());
        assert_eq!(deck.hands().dealt_count(), 54);
    }

    #[test]
    fn reset_restores_54_and_clears_hands() {
        let mut rng = rng(11);
        let mut deck = ActionDeck::new(&mut rng);
        deck.deal("Alice");
        deck.deal("Bob");
        deck.reset(&mut rng);

        assert_eq!(deck.remaining(), 54);
        assert!(deck.hands().is_empty());
        assert!(deck.hand("Alice").is_err());
    }

    #[test]
    fn shuffle_remaining_keeps_dealt_and_count() {
        let mut rng = rng(5);
        let mut deck = ActionDeck::new(&mut rng);
        let dealt = deck.deal("Alice").unwrap();
        deck.shuffle_remaining(&mut rng);

        assert_eq!(deck.remaining(), 53);
        assert_eq!(deck.hand("Alice").unwrap(), &[dealt]);
    }

    #[test]
    fn shuffle_remaining_preserves_the_card_set() {
        let mut rng = rng(9);
        let mut deck = ActionDeck::new(&mut rng);
        for _ in 0..20 {
            deck.deal("Alice");
        }

        let mut before: Vec<Card> = Vec::new();
        let mut scratch = deck.clone();
        while let Some(c) = scratch.deal("x") {
            before.push(c);
        }

        deck.shuffle_remaining(&mut rng);
        let mut after: Vec<Card> = Vec::new();
        while let Some(c) = deck.deal("x") {
            after.push(c);
        }

        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_participant_is_an_error() {
        let mut rng = rng(1);
        let deck = ActionDeck::new(&mut rng);
        let err = deck.hand("Ghost").unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }
}
