//! Weight vectors, and sampling an outcome from them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{misc::log::targets, types::err::ConfigurationError};

/// A weight for an outcome.
pub type Weight = f64;

/// Non-negative, finite, weights for outcomes `0..len`.
///
/// Weights need not sum to one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Weight>", into = "Vec<Weight>")]
pub struct Weights {
    weights: Vec<Weight>,
    total: Weight,
}

impl Weights {
    /// Weights from a vector, or an error on the first negative or non-finite weight, or on a non-finite total.
    ///
    /// The position of an error is the index of the weight, and may be extended by a containing table.
    pub fn new(weights: Vec<Weight>) -> Result<Self, ConfigurationError> {
        if let Some((index, weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, weight)| !(weight.is_finite() && **weight >= 0.0))
        {
            return Err(ConfigurationError::InvalidWeight {
                position: vec![index],
                weight: *weight,
            });
        }

        let total: Weight = weights.iter().sum();
        if !total.is_finite() {
            return Err(ConfigurationError::InfiniteTotal { position: Vec::new() });
        }

        Ok(Weights { weights, total })
    }

    /// The number of outcomes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total(&self) -> Weight {
        self.total
    }

    pub fn as_slice(&self) -> &[Weight] {
        &self.weights
    }

    /// An outcome, chosen with probability proportional to its weight.
    ///
    /// - Without outcomes, `None`.
    /// - If every weight is zero, the final outcome. No draw is made.
    /// - Otherwise, a uniform draw from [0, total) and the first outcome whose cumulative weight meets the draw.
    ///   An outcome with zero weight is never chosen.
    pub fn sample(&self, rng: &mut impl Rng) -> Option<usize> {
        if self.weights.is_empty() {
            return None;
        }

        let last = self.weights.len() - 1;

        if self.total <= 0.0 {
            log::trace!(target: targets::SAMPLER, "Zero weight, taking outcome {last}");
            return Some(last);
        }

        let draw = rng.random::<f64>() * self.total;

        let mut cumulative = 0.0;
        let mut last_positive = last;
        for (outcome, weight) in self.weights.iter().enumerate() {
            if *weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            last_positive = outcome;
            if draw <= cumulative {
                return Some(outcome);
            }
        }

        // Only reachable through rounding of the cumulative sum.
        Some(last_positive)
    }
}

impl TryFrom<Vec<Weight>> for Weights {
    type Error = ConfigurationError;

    fn try_from(weights: Vec<Weight>) -> Result<Self, Self::Error> {
        Weights::new(weights)
    }
}

impl From<Weights> for Vec<Weight> {
    fn from(weights: Weights) -> Self {
        weights.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn invalid_weights() {
        assert_eq!(
            Weights::new(vec![1.0, -0.5]),
            Err(ConfigurationError::InvalidWeight {
                position: vec![1],
                weight: -0.5
            })
        );
        assert!(Weights::new(vec![f64::NAN]).is_err());
        assert!(Weights::new(vec![f64::INFINITY]).is_err());
        assert!(Weights::new(vec![-0.0, 1.0]).is_ok());
    }

    #[test]
    fn total_must_be_finite() {
        assert_eq!(
            Weights::new(vec![1e308, 1e308]),
            Err(ConfigurationError::InfiniteTotal { position: vec![] })
        );
        assert!(Weights::new(vec![1e308, 1.0]).is_ok());
    }

    #[test]
    fn empty_has_no_outcome() {
        let mut rng = MinimalPCG32::seed_from_u64(1);
        assert_eq!(Weights::default().sample(&mut rng), None);
    }

    #[test]
    fn zero_total_is_final_outcome_without_draw() {
        let weights = Weights::new(vec![0.0, 0.0, 0.0]).unwrap();

        let mut rng = MinimalPCG32::seed_from_u64(9);
        let untouched = rng.clone();
        assert_eq!(weights.sample(&mut rng), Some(2));
        assert_eq!(rng, untouched);
    }

    #[test]
    fn single_positive_weight() {
        let weights = Weights::new(vec![0.0, 0.0, 4.0, 0.0]).unwrap();
        let mut rng = MinimalPCG32::seed_from_u64(3);
        for _ in 0..256 {
            assert_eq!(weights.sample(&mut rng), Some(2));
        }
    }

    #[test]
    fn zero_weight_never_chosen() {
        let weights = Weights::new(vec![0.0, 1.0, 0.0, 1.0]).unwrap();
        let mut rng = MinimalPCG32::seed_from_u64(11);
        let mut seen = [0; 4];
        for _ in 0..2000 {
            seen[weights.sample(&mut rng).unwrap()] += 1;
        }
        assert_eq!(seen[0], 0);
        assert_eq!(seen[2], 0);
        assert!(seen[1] > 800 && seen[3] > 800);
    }

    #[test]
    fn proportional() {
        let weights = Weights::new(vec![1.0, 3.0]).unwrap();
        let mut rng = MinimalPCG32::seed_from_u64(5);
        let trials = 20_000;
        let ones = (0..trials)
            .filter(|_| weights.sample(&mut rng) == Some(1))
            .count();
        let ratio = ones as f64 / trials as f64;
        assert!((ratio - 0.75).abs() < 0.02, "ratio {ratio}");
    }

    #[test]
    fn json() {
        let weights: Weights = serde_json::from_str("[0, 2, 2]").unwrap();
        assert_eq!(weights.as_slice(), &[0.0, 2.0, 2.0]);
        assert_eq!(weights.total(), 4.0);
        assert!(serde_json::from_str::<Weights>("[1, -1]").is_err());
    }
}
