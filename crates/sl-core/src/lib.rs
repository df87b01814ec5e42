//! Core types for Spielleiter: characters, monsters, encounters, and
//! the campaign that owns them.
//!
//! This crate defines the persistent data model the session engine
//! drives. It knows nothing about commands or dealing cards; a
//! [`Campaign`] can be built programmatically or loaded from JSON.

/// The campaign aggregate and its persistence.
pub mod campaign;
/// Player characters and typed sheet updates.
pub mod character;
/// Encounter rosters.
pub mod encounter;
/// Error types used throughout the crate.
pub mod error;
/// Monsters.
pub mod monster;
/// The item catalog characters buy from.
pub mod store;

/// Re-export the campaign aggregate.
pub use campaign::Campaign;
/// Re-export character types.
pub use character::{Character, CharacterId, CharacterUpdate};
/// Re-export encounter types.
pub use encounter::{Encounter, EncounterId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export monster types.
pub use monster::{Monster, MonsterId};
/// Re-export store types.
pub use store::{Store, StoreItem};
