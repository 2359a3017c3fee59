/*!
Methods for generating formulas as configured.

# Overview

Generation assembles [count](crate::config::Config::count) formulas, one after another, each of [clauses](crate::config::Config::clauses) clauses at [depth](crate::config::Config::depth).
A single source of randomness is used throughout, so the *i*th formula of a run depends on every formula before it.

The configuration has been validated by the time a generator exists, and so generation itself does not fail.
Degraded formulas are returned as they are, and noted in the counters.

```rust
# use mcnf_gen::config::Config;
# use mcnf_gen::generator::Generator;
# use mcnf_gen::notation::Notation;
let mut config = Config::default();
config.count.value = 2;

let mut generator = Generator::from_seed(config, Some(1)).unwrap();
let text = generator.generate_text(Notation::Unicode);

assert!(text.starts_with("=== Formula 1 ===\n"));
assert!(text.contains("\n\n=== Formula 2 ===\n"));
```
*/

use rand::Rng;

use crate::{
    generator::GenericGenerator, misc::log::targets, notation::Notation,
    structures::formula::Formula,
};

/// Methods related to the generation of formulas.
impl<R: Rng> GenericGenerator<R> {
    /// A single formula, as configured.
    pub fn generate_formula(&mut self) -> Formula {
        let depth = self.parameters.depth;
        let clauses = self.parameters.clauses;
        self.make_formula(depth, clauses)
    }

    /// All configured formulas, in order.
    pub fn generate(&mut self) -> Vec<Formula> {
        let count = self.parameters.count;
        let mut formulas = Vec::new();

        for index in 1..=count {
            let formula = self.generate_formula();
            log::info!(target: targets::DRIVER,
                "Formula {index}: {} clauses, depth {}", formula.len(), formula.depth());
            formulas.push(formula);
        }

        if self.counters.short_formulas > 0 || self.counters.degraded_clauses > 0 {
            log::warn!(target: targets::DRIVER,
                "Degraded: {} short formulas, {} clauses with repeated atoms",
                self.counters.short_formulas, self.counters.degraded_clauses);
        }

        formulas
    }

    /// All configured formulas, written in the given notation.
    pub fn generate_text(&mut self, notation: Notation) -> String {
        notation.batch(&self.generate())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, generator::Generator};

    #[test]
    fn count_respected() {
        let mut config = Config::default();
        config.count.value = 5;
        let mut generator = Generator::from_seed(config, Some(31)).unwrap();
        let formulas = generator.generate();

        assert_eq!(formulas.len(), 5);
        assert_eq!(generator.counters.formulas, 5);
        assert!(formulas.iter().all(|formula| formula.depth() <= 2));
    }

    #[test]
    fn later_formulas_differ() {
        let mut config = Config::default();
        config.count.value = 2;
        let mut generator = Generator::from_seed(config, Some(32)).unwrap();
        let formulas = generator.generate();

        // Same parameters, though the source has moved on.
        assert_ne!(formulas[0], formulas[1]);
    }
}
