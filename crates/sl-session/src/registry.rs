//! Registry of live sessions keyed by channel.
//!
//! A front end that serves several tables at once (one per chat
//! channel, terminal, or window) parks each table's session here and
//! routes input lines to the right one.

use std::collections::HashMap;

use sl_core::Campaign;

use crate::config::SessionConfig;
use crate::session::GameSession;

/// Live sessions, one per channel.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, GameSession>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for a channel, starting one if none is running.
    ///
    /// When a session already exists for the channel it is kept as is;
    /// the given campaign and config only seed a fresh session.
    pub fn open(
        &mut self,
        channel: impl Into<String>,
        campaign: Campaign,
        config: SessionConfig,
    ) -> &mut GameSession {
        self.sessions
            .entry(channel.into())
            .or_insert_with(|| GameSession::new(campaign, config))
    }

    /// The session for a channel, if one is running.
    pub fn get(&self, channel: &str) -> Option<&GameSession> {
        self.sessions.get(channel)
    }

    /// Mutable access to a channel's session.
    pub fn get_mut(&mut self, channel: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(channel)
    }

    /// Close a channel's session and hand it back, so the caller can
    /// save its campaign.
    pub fn close(&mut self, channel: &str) -> Option<GameSession> {
        self.sessions.remove(channel)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether any session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
