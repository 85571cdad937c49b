//! Service configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a [`GameService`](crate::service::GameService).
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// RNG seed. `Some` gives deterministic question generation (tests);
    /// `None` seeds from OS entropy (production).
    pub seed: Option<u64>,
}

impl ServiceConfig {
    /// Set a fixed RNG seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the service RNG this configuration describes.
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
    fn default_has_no_seed() {
        assert!(ServiceConfig::default().seed.is_none());
    }

    #[test]
    fn seeded_rngs_agree() {
        let config = ServiceConfig::default().with_seed(11);
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.random_range(0..1000), b.random_range(0..1000));
    }
}
