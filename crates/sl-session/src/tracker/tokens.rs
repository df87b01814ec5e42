//! Status token tracking for encounter participants.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A status token from the fixed game vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Rattled; must recover before acting freely.
    Shaken,
    /// Taking careful aim.
    Aim,
    /// Caught in something.
    Entangled,
    /// Carrying a wound.
    Wounded,
    /// Fully restrained.
    Bound,
    /// Worn down.
    Fatigue,
    /// Briefly out of action.
    Stunned,
    /// Easier to hit.
    Vulnerable,
    /// Fighting defensively.
    Defend,
    /// Holding their action.
    Hold,
    /// Attention elsewhere.
    Distracted,
}

impl Token {
    /// Every token, in display order.
    pub const ALL: [Token; 11] = [
        Token::Shaken,
        Token::Aim,
        Token::Entangled,
        Token::Wounded,
        Token::Bound,
        Token::Fatigue,
        Token::Stunned,
        Token::Vulnerable,
        Token::Defend,
        Token::Hold,
        Token::Distracted,
    ];

    /// Parse a token name, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "shaken" => Some(Token::Shaken),
            "aim" => Some(Token::Aim),
            "entangled" => Some(Token::Entangled),
            "wounded" => Some(Token::Wounded),
            "bound" => Some(Token::Bound),
            "fatigue" => Some(Token::Fatigue),
            "stunned" => Some(Token::Stunned),
            "vulnerable" => Some(Token::Vulnerable),
            "defend" => Some(Token::Defend),
            "hold" => Some(Token::Hold),
            "distracted" => Some(Token::Distracted),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::Shaken => "Shaken",
            Token::Aim => "Aim",
            Token::Entangled => "Entangled",
            Token::Wounded => "Wounded",
            Token::Bound => "Bound",
            Token::Fatigue => "Fatigue",
            Token::Stunned => "Stunned",
            Token::Vulnerable => "Vulnerable",
            Token::Defend => "Defend",
            Token::Hold => "Hold",
            Token::Distracted => "Distracted",
        };
        write!(f, "{name}")
    }
}

/// Who currently carries which tokens.
///
/// Carriers are matched case-insensitively; a carrier with no tokens
/// left disappears from the board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenBoard {
    tokens: BTreeMap<String, BTreeSet<Token>>,
}

impl TokenBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give a token to a participant. Returns false if already carried.
    pub fn give(&mut self, participant: impl Into<String>, token: Token) -> bool {
        let participant = participant.into();
        let key = self.find_key(&participant).unwrap_or(participant);
        self.tokens.entry(key).or_default().insert(token)
    }

    /// Take a token from a participant. Returns true if carried.
    pub fn remove(&mut self, participant: &str, token: Token) -> bool {
        let key = match self.find_key(participant) {
            Some(key) => key,
            None => return false,
        };
        let removed = match self.tokens.get_mut(&key) {
            Some(set) => set.remove(&token),
            None => false,
        };
        if removed && self.tokens.get(&key).is_some_and(BTreeSet::is_empty) {
            self.tokens.remove(&key);
        }
        removed
    }

    /// Drop every token a participant carries. Returns how many.
    pub fn clear(&mut self, participant: &str) -> usize {
        match self.find_key(participant) {
            Some(key) => self.tokens.remove(&key).map_or(0, |set| set.len()),
            None => 0,
        }
    }

    /// The tokens one participant carries, in display order.
    pub fn of(&self, participant: &str) -> Vec<Token> {
        let lower = participant.to_lowercase();
        self.tokens
            .iter()
            .find(|(name, _)| name.to_lowercase() == lower)
            .map(|(_, set)| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Every carrier and their tokens.
    pub fn all(&self) -> &BTreeMap<String, BTreeSet<Token>> {
        &self.tokens
    }

    /// Whether nobody carries a token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn find_key(&self, participant: &str) -> Option<String> {
        let lower = participant.to_lowercase();
        self.tokens
            .keys()
            .find(|name| name.to_lowercase() == lower)
            .cloned()
    }
}
