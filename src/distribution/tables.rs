//! Tables of weights, indexed by depth and (optionally) clause length.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    distribution::weights::{Weight, Weights},
    misc::log::targets,
    structures::atom::Depth,
    types::err::ConfigurationError,
};

/// The clause length taken when a length table has no (non-empty) weights for a depth.
pub const FALLBACK_CLAUSE_LENGTH: usize = 3;

/// The count of propositional literals taken when a mix table has no (non-empty) weights for a depth and length.
pub const FALLBACK_PROPOSITIONAL_COUNT: usize = 0;

/// One entry per depth, from depth 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepthIndexedTable<W> {
    levels: Vec<W>,
}

impl<W> DepthIndexedTable<W> {
    pub fn new(levels: Vec<W>) -> Self {
        DepthIndexedTable { levels }
    }

    /// The number of depths with an entry.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    pub fn get(&self, depth: Depth) -> Option<&W> {
        self.levels.get(depth)
    }
}

/// One row of entries per depth, from depth 0, where entry `i` of a row is for clauses of length `i + 1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepthAndLengthIndexedTable<W> {
    levels: Vec<Vec<W>>,
}

impl<W> DepthAndLengthIndexedTable<W> {
    pub fn new(levels: Vec<Vec<W>>) -> Self {
        DepthAndLengthIndexedTable { levels }
    }

    /// The number of depths with a row.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// The row of entries at the depth.
    pub fn level(&self, depth: Depth) -> Option<&[W]> {
        self.levels.get(depth).map(Vec::as_slice)
    }

    /// The entry for clauses of the given length (from 1) at the depth.
    pub fn get(&self, depth: Depth, length: usize) -> Option<&W> {
        let index = length.checked_sub(1)?;
        self.levels.get(depth)?.get(index)
    }
}

/// Weights over clause lengths, where outcome `i` is a length of `i + 1`.
pub type LengthTable = DepthIndexedTable<Weights>;

/// Weights over the number of propositional literals in a clause, where outcome `i` is a count of `i`.
pub type MixTable = DepthAndLengthIndexedTable<Weights>;

impl DepthIndexedTable<Weights> {
    /// A length table from raw weights.
    pub fn from_raw(levels: Vec<Vec<Weight>>) -> Result<Self, ConfigurationError> {
        let levels = levels
            .into_iter()
            .enumerate()
            .map(|(depth, weights)| Weights::new(weights).map_err(|e| at_position(e, &[depth])))
            .collect::<Result<_, _>>()?;
        Ok(DepthIndexedTable { levels })
    }

    /// A clause length for a clause at the depth.
    ///
    /// Falls back to [FALLBACK_CLAUSE_LENGTH] if the table has no weights at the depth.
    pub fn sample_length(&self, depth: Depth, rng: &mut impl Rng) -> usize {
        match self.get(depth).and_then(|weights| weights.sample(rng)) {
            Some(outcome) => outcome + 1,
            None => {
                log::trace!(target: targets::SAMPLER, "No length weights at depth {depth}");
                FALLBACK_CLAUSE_LENGTH
            }
        }
    }
}

impl DepthAndLengthIndexedTable<Weights> {
    /// A mix table from raw weights.
    pub fn from_raw(levels: Vec<Vec<Vec<Weight>>>) -> Result<Self, ConfigurationError> {
        let mut table = Vec::with_capacity(levels.len());
        for (depth, row) in levels.into_iter().enumerate() {
            let row = row
                .into_iter()
                .enumerate()
                .map(|(index, weights)| {
                    Weights::new(weights).map_err(|e| at_position(e, &[depth, index]))
                })
                .collect::<Result<Vec<_>, _>>()?;
            table.push(row);
        }
        Ok(DepthAndLengthIndexedTable { levels: table })
    }

    /// A count of propositional literals for a clause of the given length at the depth.
    ///
    /// Falls back to [FALLBACK_PROPOSITIONAL_COUNT] if the table has no weights at the depth and length.
    pub fn sample_propositional(&self, depth: Depth, length: usize, rng: &mut impl Rng) -> usize {
        match self
            .get(depth, length)
            .and_then(|weights| weights.sample(rng))
        {
            Some(outcome) => outcome,
            None => {
                log::trace!(target: targets::SAMPLER, "No mix weights at depth {depth}, length {length}");
                FALLBACK_PROPOSITIONAL_COUNT
            }
        }
    }

    /// Ensures no row allows more propositional literals than a clause of the row has.
    pub fn check_rows(&self) -> Result<(), ConfigurationError> {
        for (depth, row) in self.levels.iter().enumerate() {
            for (index, weights) in row.iter().enumerate() {
                let length = index + 1;
                if weights.len() > length + 1 {
                    return Err(ConfigurationError::MixRowTooLong {
                        depth,
                        length,
                        outcomes: weights.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Prefixes the position of invalid weights with the position of the weights in a table.
fn at_position(error: ConfigurationError, prefix: &[usize]) -> ConfigurationError {
    match error {
        ConfigurationError::InvalidWeight { position, weight } => {
            let mut full = prefix.to_vec();
            full.extend(position);
            ConfigurationError::InvalidWeight {
                position: full,
                weight,
            }
        }
        ConfigurationError::InfiniteTotal { position } => {
            let mut full = prefix.to_vec();
            full.extend(position);
            ConfigurationError::InfiniteTotal { position: full }
        }
        other => other,
    }
}
