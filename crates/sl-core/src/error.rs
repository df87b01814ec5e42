//! Error types for the campaign model.

use thiserror::Error;

/// Result type for campaign operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while working with campaign data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A create would reuse an existing name (names are unique
    /// case-insensitively within their kind).
    #[error("a {kind} named '{name}' already exists")]
    DuplicateName {
        /// What kind of record clashed (character, monster, ...).
        kind: &'static str,
        /// The offending name.
        name: String,
    },

    /// No character with the given name.
    #[error("character not found: {0}")]
    UnknownCharacter(String),

    /// No monster with the given name.
    #[error("monster not found: {0}")]
    UnknownMonster(String),

    /// No encounter with the given name.
    #[error("encounter not found: {0}")]
    UnknownEncounter(String),

    /// Neither a character nor a monster has the given name.
    #[error("no character or monster named: {0}")]
    UnknownMember(String),

    /// No store item with the given name.
    #[error("store item not found: {0}")]
    UnknownItem(String),

    /// A store item price was negative.
    #[error("price must not be negative: {0}")]
    InvalidPrice(i64),

    /// A money operation would take more than is available.
    #[error("{name} cannot afford that ({needed} needed, {available} available)")]
    InsufficientFunds {
        /// Whose purse fell short.
        name: String,
        /// The amount required.
        needed: i64,
        /// The amount on hand.
        available: i64,
    },

    /// Reading or writing a campaign file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A campaign file could not be (de)serialized.
    #[error("campaign file error: {0}")]
    Json(#[from] serde_json::Error),
}
