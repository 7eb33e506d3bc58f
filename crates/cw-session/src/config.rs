//! Configuration for a Castaway session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How many recent entries the `journal` command shows.
    pub journal_preview: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            journal_preview: 10,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the journal preview length (at least 1).
    pub fn with_journal_preview(mut self, entries: usize) -> Self {
        self.journal_preview = entries.max(1);
        self
    }

    /// Build the random source this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.journal_preview, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_journal_preview(3);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.journal_preview, 3);
    }

    #[test]
    fn preview_at_least_one() {
        let cfg = SessionConfig::default().with_journal_preview(0);
        assert_eq!(cfg.journal_preview, 1);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = SessionConfig::default().with_seed(7);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
