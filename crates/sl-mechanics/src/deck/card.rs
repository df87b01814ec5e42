//! Playing cards and their initiative ordering.
//!
//! The action deck uses a standard 52-card deck plus two jokers. Cards
//! order rank-major (Joker above Ace, Ace above King, and so on down
//! to two) with suits breaking ties: Spades > Hearts > Diamonds >
//! Clubs. A joker outranks every suited card.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank of a suited playing card, two through Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace, the highest suited rank.
    Ace = 14,
}

impl Rank {
    /// All thirteen ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric tier used for ordering: 2-10 face value, Jack 11,
    /// Queen 12, King 13, Ace 14.
    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jack => write!(f, "Jack"),
            Self::Queen => write!(f, "Queen"),
            Self::King => write!(f, "King"),
            Self::Ace => write!(f, "Ace"),
            numbered => write!(f, "{}", numbered.tier()),
        }
    }
}

/// Suit of a playing card, lowest tiebreak first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs, the lowest suit.
    Clubs = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Hearts.
    Hearts = 3,
    /// Spades, the highest suit.
    Spades = 4,
}

impl Suit {
    /// All four suits, lowest first.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Numeric tier used for tiebreaks: Clubs 1 up to Spades 4.
    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clubs => write!(f, "Clubs"),
            Self::Diamonds => write!(f, "Diamonds"),
            Self::Hearts => write!(f, "Hearts"),
            Self::Spades => write!(f, "Spades"),
        }
    }
}

/// A single card from the action deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// A rank-and-suit card from the standard 52.
    Suited {
        /// The card's rank.
        rank: Rank,
        /// The card's suit.
        suit: Suit,
    },
    /// One of the two jokers. Jokers have no suit and beat everything.
    Joker,
}

impl Card {
    /// Ordering key as a (rank tier, suit tier) pair.
    ///
    /// Rank compares first, suit only breaks ties. The joker maps to
    /// the sentinel (15, 5) so it sorts above an Ace of any suit.
    pub fn sort_key(self) -> (u8, u8) {
        match self {
            Self::Suited { rank, suit } => (rank.tier(), suit.tier()),
            Self::Joker => (15, 5),
        }
    }

    /// Whether this card is a joker.
    pub fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suited { rank, suit } => write!(f, "{rank} of {suit}"),
            Self::Joker => write!(f, "Joker"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suited(rank: Rank, suit: Suit) -> Card {
        Card::Suited { rank, suit }
    }

    #[test]
    fn rank_tiers() {
        assert_eq!(Rank::Two.tier(), 2);
        assert_eq!(Rank::Ten.tier(), 10);
        assert_eq!(Rank::Jack.tier(), 11);
        assert_eq!(Rank::Ace.tier(), 14);
    }

    #[test]
    fn suit_tiers() {
        assert_eq!(Suit::Clubs.tier(), 1);
        assert_eq!(Suit::Diamonds.tier(), 2);
        assert_eq!(Suit::Hearts.tier(), 3);
        assert_eq!(Suit::Spades.tier(), 4);
    }

    #[test]
    fn joker_beats_every_ace() {
        for suit in Suit::ALL {
            assert!(Card::Joker > suited(Rank::Ace, suit));
        }
    }

    #[test]
    fn canonical_ordering_chain() {
        // Joker > A-spades > A-hearts > K-spades > ... > 2-clubs
        let chain = [
            Card::Joker,
            suited(Rank::Ace, Suit::Spades),
            suited(Rank::Ace, Suit::Hearts),
            suited(Rank::Ace, Suit::Diamonds),
            suited(Rank::Ace, Suit::Clubs),
            suited(Rank::King, Suit::Spades),
            suited(Rank::Queen, Suit::Spades),
            suited(Rank::Ten, Suit::Clubs),
            suited(Rank::Three, Suit::Spades),
            suited(Rank::Two, Suit::Spades),
            suited(Rank::Two, Suit::Clubs),
        ];
        for pair in chain.windows(2) {
            assert!(pair[0] > pair[1], "{} should beat {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn rank_beats_suit() {
        // A high rank in the lowest suit beats a lower rank in the highest.
        assert!(suited(Rank::King, Suit::Clubs) > suited(Rank::Queen, Suit::Spades));
        assert!(suited(Rank::Three, Suit::Clubs) > suited(Rank::Two, Suit::Spades));
    }

    #[test]
    fn suit_breaks_ties() {
        assert!(suited(Rank::King, Suit::Spades) > suited(Rank::King, Suit::Hearts));
        assert!(suited(Rank::King, Suit::Hearts) > suited(Rank::King, Suit::Diamonds));
        assert!(suited(Rank::King, Suit::Diamonds) > suited(Rank::King, Suit::Clubs));
    }

    #[test]
    fn jokers_are_equal() {
        assert_eq!(Card::Joker.cmp(&Card::Joker), Ordering::Equal);
        assert_eq!(Card::Joker.sort_key(), (15, 5));
    }

    #[test]
    fn display_forms() {
        assert_eq!(suited(Rank::King, Suit::Spades).to_string(), "King of Spades");
        assert_eq!(suited(Rank::Two, Suit::Clubs).to_string(), "2 of Clubs");
        assert_eq!(suited(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
        assert_eq!(Card::Joker.to_string(), "Joker");
    }

    #[test]
    fn serde_roundtrip() {
        let card = suited(Rank::Queen, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);

        let json = serde_json::to_string(&Card::Joker).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert!(back.is_joker());
    }
}
