//! Journaling system for recording session events.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
