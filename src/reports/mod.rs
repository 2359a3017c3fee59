/*!
Reports on generated formulas.

A [FormulaStats] summarises the structure of a formula, counting through every level of nesting.

```rust
# use mcnf_gen::reports::FormulaStats;
# use mcnf_gen::structures::{atom::Atom, clause::Clause, formula::Formula, literal::Literal};
let body = Clause::from_literals(vec![
    Literal::new(Atom::Propositional(1), true),
    Literal::new(Atom::Propositional(2), false),
]);
let clause = Clause::from_literals(vec![
    Literal::new(Atom::Propositional(3), true),
    Literal::new(Atom::Modal { index: 1, body }, true),
]);
let stats = FormulaStats::of(&Formula::new(vec![clause], 1));

assert_eq!(stats.literals, 4);
assert_eq!(stats.propositional_literals, 3);
assert_eq!(stats.modalities, 1);
assert_eq!(stats.depth, 1);
```
*/

use crate::structures::{
    atom::{Atom, Depth},
    clause::Clause,
    formula::Formula,
};

/// Structural statistics of a formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormulaStats {
    /// Clauses of the formula, not counting clauses within boxes.
    pub clauses: usize,

    /// Clauses requested of the formula.
    pub requested: usize,

    /// Literals at any level.
    pub literals: usize,

    /// Propositional literals at any level.
    pub propositional_literals: usize,

    /// Occurrences of a box.
    pub modalities: usize,

    /// The modal depth of the formula.
    pub depth: Depth,

    /// Whether the formula is [degraded](Formula::is_degraded).
    pub degraded: bool,
}

impl FormulaStats {
    pub fn of(formula: &Formula) -> Self {
        let mut stats = FormulaStats {
            clauses: formula.len(),
            requested: formula.requested(),
            depth: formula.depth(),
            degraded: formula.is_degraded(),
            ..Default::default()
        };

        for clause in formula.clauses() {
            stats.count_clause(clause);
        }

        stats
    }

    fn count_clause(&mut self, clause: &Clause) {
        for literal in clause.literals() {
            self.literals += 1;
            match literal.atom() {
                Atom::Propositional(_) => self.propositional_literals += 1,
                Atom::Modal { body, .. } => {
                    self.modalities += 1;
                    self.count_clause(body);
                }
            }
        }
    }
}

impl std::fmt::Display for FormulaStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "clauses {}/{}, literals {} ({} propositional), modalities {}, depth {}",
            self.clauses,
            self.requested,
            self.literals,
            self.propositional_literals,
            self.modalities,
            self.depth
        )?;
        if self.degraded {
            write!(f, ", degraded")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn short_formula_reported() {
        let clause = Clause::from_literals(vec![Literal::new(Atom::Propositional(1), false)]);
        let stats = FormulaStats::of(&Formula::new(vec![clause], 2));
        assert!(stats.degraded);
        assert_eq!(
            stats.to_string(),
            "clauses 1/2, literals 1 (1 propositional), modalities 0, depth 0, degraded"
        );
    }

    #[test]
    fn nested_boxes_counted() {
        let inner = Clause::from_literals(vec![Literal::new(Atom::Propositional(1), true)]);
        let middle = Clause::from_literals(vec![Literal::new(
            Atom::Modal {
                index: 1,
                body: inner,
            },
            false,
        )]);
        let outer = Clause::from_literals(vec![Literal::new(
            Atom::Modal {
                index: 2,
                body: middle,
            },
            true,
        )]);
        let stats = FormulaStats::of(&Formula::new(vec![outer], 1));
        assert_eq!(stats.modalities, 2);
        assert_eq!(stats.literals, 3);
        assert_eq!(stats.propositional_literals, 1);
        assert_eq!(stats.depth, 2);
        assert!(!stats.degraded);
    }
}
