//! Configuration for a game session.

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible shuffles and rolls.
    pub seed: u64,
    /// How many bennies the bank starts with.
    pub benny_bank: u32,
    /// How many entries the `journal` command shows.
    pub journal_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            benny_bank: 20,
            journal_window: 10,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the benny bank size.
    pub fn with_bank(mut self, bank: u32) -> Self {
        self.benny_bank = bank;
        self
    }

    /// Set the journal window (at least 1).
    pub fn with_journal_window(mut self, window: usize) -> Self {
        self.journal_window = window.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.benny_bank, 20);
        assert_eq!(cfg.journal_window, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default().with_seed(123).with_bank(8);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.benny_bank, 8);
    }

    #[test]
    fn journal_window_floored() {
        let cfg = SessionConfig::default().with_journal_window(0);
        assert_eq!(cfg.journal_window, 1);
    }
}
