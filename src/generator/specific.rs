use rand::SeedableRng;

use crate::{
    config::{Config, Parameters},
    generic::random::MinimalPCG32,
    misc::log::targets,
    types::err::ConfigurationError,
};

use super::GenericGenerator;

/// A generator which uses [MinimalPCG32] as a source of randomness.
pub type Generator = GenericGenerator<MinimalPCG32>;

impl Generator {
    /// Creates a generator from some given configuration and seed.
    ///
    /// Without a seed, a seed is taken from the entropy of the system and logged, so the run may be repeated.
    /// In either case, the config is validated first.
    pub fn from_seed(config: Config, seed: Option<u64>) -> Result<Self, ConfigurationError> {
        let parameters = config.validate()?;
        let seed = seed.unwrap_or_else(|| {
            let seed = rand::random::<u64>();
            log::info!(target: targets::DRIVER, "Seed from entropy: {seed}");
            seed
        });

        Ok(Self::from_validated_seed(config, parameters, seed))
    }

    pub(crate) fn from_validated_seed(config: Config, parameters: Parameters, seed: u64) -> Self {
        log::debug!(target: targets::DRIVER, "Seed: {seed}");
        Self::from_parameters(config, parameters, MinimalPCG32::seed_from_u64(seed))
    }
}
