/*!
The generator, which holds everything needed to build formulas.

A generator is built from a [Config] which [validates](Config::validate), together with a source of randomness.
The source is owned by the generator and consumed in a fixed order by the [procedures](crate::procedures), and so two generators built from the same config and the same seed build the same formulas.

```rust
# use mcnf_gen::config::Config;
# use mcnf_gen::generator::Generator;
let mut one = Generator::from_seed(Config::default(), Some(73)).unwrap();
let mut two = Generator::from_seed(Config::default(), Some(73)).unwrap();

assert_eq!(one.generate(), two.generate());
```

A generator is not shared between threads.
For parallel generation, see [batch](crate::batch), which builds an independently seeded generator for each task.
*/

mod counters;
mod specific;

pub use counters::Counters;
pub use specific::Generator;

use crate::{
    config::{Config, Parameters},
    types::err::ConfigurationError,
};

/// A generic generator, paramaterised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use mcnf_gen::generator::GenericGenerator;
/// # use mcnf_gen::generic::random::MinimalPCG32;
/// # use mcnf_gen::config::Config;
/// # use rand::SeedableRng;
/// let generator = GenericGenerator::from_config(Config::default(), MinimalPCG32::seed_from_u64(0));
/// assert!(generator.is_ok());
/// ```
pub struct GenericGenerator<R: rand::Rng> {
    /// The configuration of the generator.
    pub(crate) config: Config,

    /// The checked parameters of the configuration.
    pub(crate) parameters: Parameters,

    /// The source of rng.
    pub(crate) rng: R,

    /// Counts of attempts and degradations.
    pub counters: Counters,
}

impl<R: rand::Rng> GenericGenerator<R> {
    /// Creates a generator from some given configuration, if the configuration validates.
    ///
    /// The source of randomness is untouched by validation.
    pub fn from_config(config: Config, rng: R) -> Result<Self, ConfigurationError> {
        let parameters = config.validate()?;
        Ok(Self::from_parameters(config, parameters, rng))
    }

    /// Creates a generator from a configuration and the result of validating the configuration.
    pub(crate) fn from_parameters(config: Config, parameters: Parameters, rng: R) -> Self {
        GenericGenerator {
            config,
            parameters,
            rng,
            counters: Counters::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Takes the source of randomness, in whatever state generation has left it.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
