/*!
Methods for assembling a formula.

# Overview

A formula of *L* clauses at depth *d* is assembled by repeatedly [building](crate::procedures::clause) a clause at depth *d*, and keeping the clause only if an equal clause has not already been kept.
Assembly stops once *L* clauses are kept, or after *L* × [formula_attempts_per_clause](crate::config::Config::formula_attempts_per_clause) clauses have been built.

In the latter case the formula is short, which is seen via [is_short](crate::structures::formula::Formula::is_short).
Clauses of a formula are always distinct, and so a short formula is the only way in which assembly degrades.

For example, with a single variable and clauses of length one there are only two clauses, A1 and ¬A1, and so a request for three clauses returns a formula with at most two.
*/

use std::collections::HashSet;

use rand::Rng;

use crate::{
    generator::GenericGenerator,
    generic::retry::{retry_with_budget, Attempt},
    misc::log::targets,
    structures::{atom::Depth, clause::Clause, formula::Formula},
};

/// Methods related to assembling formulas.
impl<R: Rng> GenericGenerator<R> {
    /// Assembles a formula of up to `clauses` distinct clauses at the given depth.
    pub fn make_formula(&mut self, depth: Depth, clauses: usize) -> Formula {
        let budget = self.parameters.formula_attempts(clauses);
        // Space grows with the clauses found, not with the request.
        let mut kept: Vec<Clause> = Vec::new();
        let mut seen: HashSet<Clause> = HashSet::default();

        let retried = retry_with_budget(budget, || {
            let clause = self.make_clause(depth);
            match seen.insert(clause.clone()) {
                false => self.counters.repeated_clauses += 1,
                true => kept.push(clause),
            }

            match kept.len() >= clauses {
                true => Attempt::Success(()),
                false => Attempt::Failure(()),
            }
        });

        let formula = Formula::new(kept, clauses);

        self.counters.formulas += 1;
        if formula.is_short() {
            self.counters.short_formulas += 1;
            log::debug!(target: targets::FORMULA,
                "Short formula: {} of {clauses} clauses after {} attempts", formula.len(), retried.attempts);
        }

        formula
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{defaults, Config},
        distribution::{LengthTable, MixTable},
        generator::Generator,
    };

    #[test]
    fn requested_clauses_are_distinct() {
        let mut generator = Generator::from_seed(Config::default(), Some(21)).unwrap();
        for _ in 0..20 {
            let formula = generator.make_formula(2, 4);
            assert_eq!(formula.len(), 4);
            assert!(!formula.is_short());
            for (index, clause) in formula.clauses().iter().enumerate() {
                assert!(!formula.clauses()[index + 1..].contains(clause));
            }
        }
    }

    #[test]
    fn short_when_clauses_run_out() {
        let mut config = Config::default();
        config.depth.value = 0;
        config.variables.value = 1;
        config.lengths = LengthTable::from_raw(vec![vec![1.0]]).unwrap();
        config.mix = MixTable::default();

        let mut generator = Generator::from_seed(config, Some(22)).unwrap();
        let formula = generator.make_formula(0, 50);

        assert!(formula.len() <= 2);
        assert!(formula.is_short());
        assert_eq!(formula.requested(), 50);
        assert_eq!(generator.counters.short_formulas, 1);
        assert_eq!(generator.counters.clauses, 500);
    }

    #[test]
    fn largest_request_on_two_clauses() {
        let mut config = Config::default();
        config.depth.value = 0;
        config.variables.value = 1;
        config.clauses.value = defaults::CLAUSES_MAX;
        config.formula_attempts_per_clause.value = 1;
        config.lengths = LengthTable::from_raw(vec![vec![1.0]]).unwrap();
        config.mix = MixTable::default();

        let mut generator = Generator::from_seed(config, Some(23)).unwrap();
        let formula = generator.generate_formula();

        assert!(formula.len() <= 2);
        assert!(formula.is_short());
        assert_eq!(formula.requested(), defaults::CLAUSES_MAX as usize);
        assert_eq!(generator.counters.clauses, defaults::CLAUSES_MAX as usize);
        assert_eq!(generator.counters.repeated_clauses, defaults::CLAUSES_MAX as usize - formula.len());
    }
}
