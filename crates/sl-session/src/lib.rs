//! Interactive play sessions for Spielleiter.
//!
//! Provides the command processor that drives a table through a game
//! session: dealing initiative from the action deck, dice rolls, status
//! tokens, the benny economy, campaign bookkeeping, and a journal that
//! records the session as it happens.

mod command;

pub mod config;
pub mod error;
pub mod journal;
pub mod registry;
pub mod session;
pub mod tracker;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use registry::SessionRegistry;
pub use session::GameSession;
