//! Trackers for status tokens and bennies.

pub mod bennies;
pub mod tokens;

pub use bennies::BennyPool;
pub use tokens::{Token, TokenBoard};
