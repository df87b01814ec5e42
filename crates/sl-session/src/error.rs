//! Error types for the session engine.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Malformed command input; the message explains the expected form.
    #[error("{0}")]
    Usage(String),

    /// Verb not recognized.
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// Token name outside the fixed vocabulary.
    #[error(
        "unknown token: {0} (valid: shaken, aim, entangled, wounded, bound, \
         fatigue, stunned, vulnerable, defend, hold, distracted)"
    )]
    UnknownToken(String),

    /// The benny bank cannot cover a grant.
    #[error("the bank only has {available} bennies ({requested} requested)")]
    BankShort {
        /// How many bennies were asked for.
        requested: u32,
        /// How many the bank holds.
        available: u32,
    },

    /// A participant tried to spend more bennies than they hold.
    #[error("{who} only has {available} bennies ({requested} requested)")]
    BennyShort {
        /// Who tried to spend.
        who: String,
        /// How many bennies they tried to spend.
        requested: u32,
        /// How many they hold.
        available: u32,
    },

    /// Campaign data error.
    #[error("{0}")]
    Core(#[from] sl_core::CoreError),

    /// Mechanics engine error.
    #[error("{0}")]
    Mech(#[from] sl_mechanics::MechError),
}
