/*!
Methods for building a clause.

# Overview

A clause at depth *d* is built by:
- Drawing a length *K* from the [length table](crate::distribution::LengthTable) at depth *d*.
- Drawing a count *P* of propositional literals from the [mix table](crate::distribution::MixTable) at depth *d* and length *K*.
- Making *P* propositional literals, and then *K* - *P* [literals](crate::procedures::literal) at depth *d*.

At depth 0 every literal is propositional, whatever *P* is drawn.

# Repeated atoms

A clause with two literals on the same atom is rejected, and the whole clause is drawn again, length and mix included.
After [clause_attempts](crate::config::Config::clause_attempts) rejections the last clause drawn is kept, repeats and all.

Whether a clause was kept in this way can be seen from the clause itself, via [has_repeated_atoms](crate::structures::clause::Clause::has_repeated_atoms), and is noted in the [counters](crate::generator::Counters).
Note, modal atoms are compared structurally, so □1(A1) and □1(A1) are the same atom while □1(A1) and □2(A1) are not.
*/

use rand::Rng;

use crate::{
    generator::GenericGenerator,
    generic::retry::{retry_with_budget, Attempt},
    misc::log::targets,
    structures::{atom::Depth, clause::Clause},
};

/// Methods related to building clauses.
impl<R: Rng> GenericGenerator<R> {
    /// Builds a clause at the given depth, retrying on repeated atoms.
    pub fn make_clause(&mut self, depth: Depth) -> Clause {
        let budget = self.parameters().clause_attempts;

        let retried = retry_with_budget(budget, || {
            let clause = self.draw_clause(depth);
            match clause.has_repeated_atoms() {
                false => Attempt::Success(clause),
                true => Attempt::Failure(clause),
            }
        });

        self.counters.clauses += 1;
        self.counters.clause_attempts += retried.attempts;

        if !retried.succeeded {
            self.counters.degraded_clauses += 1;
            log::debug!(target: targets::CLAUSE, "Repeated atoms at depth {depth} after {budget} attempts");
        }

        retried.value.unwrap_or_default()
    }

    /// A single draw of a clause, without any check on repeated atoms.
    fn draw_clause(&mut self, depth: Depth) -> Clause {
        let length = self.config.lengths.sample_length(depth, &mut self.rng);
        let propositional = self
            .config
            .mix
            .sample_propositional(depth, length, &mut self.rng);

        log::trace!(target: targets::CLAUSE, "Drawing {propositional}/{length} propositional at depth {depth}");

        let mut literals = Vec::with_capacity(length);
        for _ in 0..propositional {
            literals.push(self.make_propositional_literal());
        }
        for _ in propositional..length {
            literals.push(self.make_literal(depth));
        }

        Clause::from_literals(literals)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        distribution::{LengthTable, MixTable},
        generator::Generator,
    };

    fn config(depth: i64, variables: i64, lengths: Vec<Vec<f64>>, mix: Vec<Vec<Vec<f64>>>) -> Config {
        let mut config = Config::default();
        config.depth.value = depth;
        config.variables.value = variables;
        config.lengths = LengthTable::from_raw(lengths).unwrap();
        config.mix = MixTable::from_raw(mix).unwrap();
        config
    }

    #[test]
    fn lengths_follow_the_table() {
        let config = config(0, 8, vec![vec![0.0, 1.0, 0.0]], vec![]);
        let mut generator = Generator::from_seed(config, Some(3)).unwrap();
        for _ in 0..50 {
            assert_eq!(generator.make_clause(0).len(), 2);
        }
    }

    #[test]
    fn fallback_length_without_weights() {
        let config = config(0, 8, vec![vec![]], vec![]);
        let mut generator = Generator::from_seed(config, Some(4)).unwrap();
        assert_eq!(generator.make_clause(0).len(), 3);
    }

    #[test]
    fn mix_follows_the_table() {
        let config = config(
            1,
            8,
            vec![vec![1.0], vec![0.0, 0.0, 1.0]],
            vec![vec![], vec![vec![], vec![], vec![0.0, 1.0, 0.0, 0.0]]],
        );
        let mut generator = Generator::from_seed(config, Some(5)).unwrap();
        for _ in 0..20 {
            let clause = generator.make_clause(1);
            let propositional = clause
                .literals()
                .iter()
                .filter(|literal| literal.atom().is_propositional())
                .count();
            assert_eq!(clause.len(), 3);
            assert_eq!(propositional, 1);
            assert_eq!(clause.depth(), 1);
        }
    }

    #[test]
    fn repeats_kept_after_budget() {
        // Three literals over two variables always repeat.
        let config = config(0, 2, vec![vec![0.0, 0.0, 1.0]], vec![]);
        let mut generator = Generator::from_seed(config, Some(6)).unwrap();
        let clause = generator.make_clause(0);

        assert_eq!(clause.len(), 3);
        assert!(clause.has_repeated_atoms());
        assert_eq!(generator.counters.clause_attempts, 100);
        assert_eq!(generator.counters.degraded_clauses, 1);
    }

    #[test]
    fn no_repeats_when_avoidable() {
        let mut generator = Generator::from_seed(Config::default(), Some(7)).unwrap();
        for _ in 0..50 {
            assert!(generator.make_clause(2).is_well_formed());
        }
    }
}
