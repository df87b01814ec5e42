//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// Turn advancement was requested with no initiative dealt.
    #[error("no active encounter")]
    EmptyOrder,

    /// A hand lookup referenced a participant the deck has never dealt to.
    #[error("player not found: {0}")]
    UnknownParticipant(String),

    /// A dice expression could not be parsed.
    #[error("invalid dice expression: {0}")]
    InvalidExpression(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
