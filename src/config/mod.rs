/*!
Configuration of a generator.

All parameters of a [generator](crate::generator) are contained in a [Config].
Numeric parameters are [ConfigOption]s, which carry a name and bounds alongside a value.
Values are signed, so that (e.g.) a negative depth read from the command line reaches [Config::validate] and is reported as a [ConfigurationError] naming the parameter.

[Config::validate] checks every parameter, and the shape of the distribution tables against the depth, and returns the checked values as [Parameters].
A generator is only built from a config which validates, and so an invalid config never consumes randomness.

```rust
# use mcnf_gen::config::Config;
# use mcnf_gen::types::err::ConfigurationError;
let mut config = Config::default();
assert!(config.validate().is_ok());

config.boxes.value = 0;
match config.validate() {
    Err(ConfigurationError::OutOfRange { name, .. }) => assert_eq!(name, "boxes"),
    _ => panic!("expected a configuration error"),
}
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use crate::{
    distribution::{LengthTable, MixTable, Weights},
    structures::atom::{BoxIndex, Depth, Variable},
    types::err::ConfigurationError,
};

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The modal depth `d` of a formula.
    pub depth: ConfigOption<i64>,

    /// The number of clauses `L` requested of a formula.
    pub clauses: ConfigOption<i64>,

    /// The number of propositional variables `N`.
    pub variables: ConfigOption<i64>,

    /// The number of boxes `m`.
    pub boxes: ConfigOption<i64>,

    /// The number of formulas to generate.
    pub count: ConfigOption<i64>,

    /// Attempts at a clause without repeated atoms.
    pub clause_attempts: ConfigOption<i64>,

    /// Attempts at a new clause, per clause requested.
    pub formula_attempts_per_clause: ConfigOption<i64>,

    /// Weights over clause lengths, by depth.
    pub lengths: LengthTable,

    /// Weights over counts of propositional literals, by depth and clause length.
    pub mix: MixTable,
}

/// The checked values of a [Config].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameters {
    pub depth: Depth,
    pub clauses: usize,
    pub variables: Variable,
    pub boxes: BoxIndex,
    pub count: usize,
    pub clause_attempts: usize,
    pub formula_attempts_per_clause: usize,
}

impl Parameters {
    /// The attempts permitted when assembling a formula of the given number of clauses.
    pub fn formula_attempts(&self, clauses: usize) -> usize {
        clauses.saturating_mul(self.formula_attempts_per_clause)
    }
}

impl Default for Config {
    /// The parameters used by the benchmark pipeline.
    fn default() -> Self {
        let lengths: Vec<Weights> = defaults::lengths()
            .into_iter()
            .map(|weights| Weights::new(weights).unwrap_or_default())
            .collect();

        let mix: Vec<Vec<Weights>> = defaults::mix()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|weights| Weights::new(weights).unwrap_or_default())
                    .collect()
            })
            .collect();

        Config {
            depth: ConfigOption {
                name: "depth",
                min: 0,
                max: defaults::DEPTH_MAX,
                value: defaults::DEPTH,
            },

            clauses: ConfigOption {
                name: "clauses",
                min: 1,
                max: defaults::CLAUSES_MAX,
                value: defaults::CLAUSES,
            },

            variables: ConfigOption {
                name: "variables",
                min: 1,
                max: Variable::MAX.into(),
                value: defaults::VARIABLES,
            },

            boxes: ConfigOption {
                name: "boxes",
                min: 1,
                max: BoxIndex::MAX.into(),
                value: defaults::BOXES,
            },

            count: ConfigOption {
                name: "count",
                min: 1,
                max: defaults::COUNT_MAX,
                value: defaults::COUNT,
            },

            clause_attempts: ConfigOption {
                name: "clause_attempts",
                min: 1,
                max: u32::MAX.into(),
                value: defaults::CLAUSE_ATTEMPTS,
            },

            formula_attempts_per_clause: ConfigOption {
                name: "formula_attempts_per_clause",
                min: 1,
                max: u32::MAX.into(),
                value: defaults::FORMULA_ATTEMPTS_PER_CLAUSE,
            },

            lengths: LengthTable::new(lengths),
            mix: MixTable::new(mix),
        }
    }
}

impl Config {
    /// Checks the parameters and the tables, returning the checked parameters.
    ///
    /// Parameters are checked in the order: depth, clauses, variables, boxes, count, and then attempts.
    /// The first failure is returned.
    pub fn validate(&self) -> Result<Parameters, ConfigurationError> {
        // Bounds are checked, so the casts are lossless.
        let depth = self.depth.checked()? as Depth;
        let clauses = self.clauses.checked()? as usize;
        let variables = self.variables.checked()? as Variable;
        let boxes = self.boxes.checked()? as BoxIndex;
        let count = self.count.checked()? as usize;
        let clause_attempts = self.clause_attempts.checked()? as usize;
        let formula_attempts_per_clause = self.formula_attempts_per_clause.checked()? as usize;

        if self.lengths.levels() <= depth {
            return Err(ConfigurationError::ShallowLengthTable {
                depth,
                levels: self.lengths.levels(),
            });
        }

        self.mix.check_rows()?;

        Ok(Parameters {
            depth,
            clauses,
            variables,
            boxes,
            count,
            clause_attempts,
            formula_attempts_per_clause,
        })
    }
}
