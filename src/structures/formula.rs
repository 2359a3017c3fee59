/*!
Formulas, conjunctions of distinct clauses.

A formula records how many clauses were requested of the [assembler](crate::procedures::formula), as the assembler may stop short when distinct clauses are hard to find.

```rust
# use mcnf_gen::structures::{atom::Atom, clause::Clause, formula::Formula, literal::Literal};
let clauses = vec![
    Clause::from_literals(vec![Literal::new(Atom::Propositional(1), true)]),
    Clause::from_literals(vec![Literal::new(Atom::Propositional(2), false)]),
];
let formula = Formula::new(clauses, 3);

assert!(formula.is_short());
assert!(formula.is_degraded());
assert_eq!(formula.to_string(), "  (A1) ∧\n  (¬A2).");
```
*/

use crate::structures::{atom::Depth, clause::Clause};

/// A conjunction of clauses, in the order they were found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
    requested: usize,
}

impl Formula {
    /// A formula of the given clauses, which were assembled toward `requested` clauses.
    pub fn new(clauses: Vec<Clause>, requested: usize) -> Self {
        Formula { clauses, requested }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The number of clauses requested when the formula was assembled.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// The greatest depth of a clause in the formula.
    pub fn depth(&self) -> Depth {
        self.clauses.iter().map(Clause::depth).max().unwrap_or(0)
    }

    /// Whether the formula has fewer clauses than requested.
    pub fn is_short(&self) -> bool {
        self.clauses.len() < self.requested
    }

    /// Whether the formula is short, or contains a clause (at any depth) with repeated atoms.
    pub fn is_degraded(&self) -> bool {
        self.is_short() || !self.clauses.iter().all(Clause::is_well_formed)
    }
}
