/*!
Clauses, disjunctions of literals.

A clause is stored in canonical form: its literals are sorted by the order on [literals](crate::structures::literal).
Two canonical clauses are equal exactly when their renderings are equal, in any [notation](crate::notation), and so a formula can compare clauses structurally rather than by text.

```rust
# use mcnf_gen::structures::{atom::Atom, clause::Clause, literal::Literal};
let clause = Clause::from_literals(vec![
    Literal::new(Atom::Propositional(3), true),
    Literal::new(Atom::Propositional(1), false),
    Literal::new(Atom::Propositional(3), false),
]);

assert_eq!(clause.to_string(), "¬A1 ∨ ¬A3 ∨ A3");
assert!(clause.has_repeated_atoms());
```

# Degraded clauses

A clause should not contain two literals on the same atom.
The [clause builder](crate::procedures::clause) retries until this holds, though with a bounded budget it may return a clause which does not.
[is_well_formed](Clause::is_well_formed) checks the requirement on a clause and on every clause nested inside it.
*/

use crate::structures::{
    atom::{Atom, Depth},
    literal::Literal,
};

/// A disjunction of literals, in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// A clause of the given literals, sorted to canonical form.
    pub fn from_literals(mut literals: Vec<Literal>) -> Self {
        literals.sort_unstable();
        Clause { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The greatest depth of an atom in the clause.
    pub fn depth(&self) -> Depth {
        self.literals
            .iter()
            .map(|literal| literal.atom().depth())
            .max()
            .unwrap_or(0)
    }

    /// Whether two literals of the clause share an atom.
    ///
    /// Only this clause is checked, not the bodies of modal atoms.
    pub fn has_repeated_atoms(&self) -> bool {
        // Sorted by atom first, so repeats are adjacent.
        self.literals
            .windows(2)
            .any(|pair| pair[0].atom() == pair[1].atom())
    }

    /// Whether neither the clause nor any clause nested within has repeated atoms.
    pub fn is_well_formed(&self) -> bool {
        !self.has_repeated_atoms()
            && self.literals.iter().all(|literal| match literal.atom() {
                Atom::Propositional(_) => true,
                Atom::Modal { body, .. } => body.is_well_formed(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(variable: u32, polarity: bool) -> Literal {
        Literal::new(Atom::Propositional(variable), polarity)
    }

    #[test]
    fn canonical_order() {
        let boxed = Literal::new(
            Atom::Modal {
                index: 1,
                body: Clause::from_literals(vec![p(1, true)]),
            },
            true,
        );
        let clause = Clause::from_literals(vec![boxed.clone(), p(2, true), p(1, false)]);
        assert_eq!(clause.literals(), &[p(1, false), p(2, true), boxed]);
    }

    #[test]
    fn order_is_independent_of_input() {
        let a = Clause::from_literals(vec![p(2, true), p(1, true), p(3, false)]);
        let b = Clause::from_literals(vec![p(3, false), p(2, true), p(1, true)]);
        assert_eq!(a, b);
    }

    #[test]
    fn nested_repeat_is_not_well_formed() {
        let bad_body = Clause::from_literals(vec![p(1, true), p(1, false)]);
        assert!(bad_body.has_repeated_atoms());

        let outer = Clause::from_literals(vec![
            p(1, true),
            Literal::new(
                Atom::Modal {
                    index: 1,
                    body: bad_body,
                },
                false,
            ),
        ]);
        assert!(!outer.has_repeated_atoms());
        assert!(!outer.is_well_formed());
        assert_eq!(outer.depth(), 1);
    }

    #[test]
    fn equal_bodies_are_the_same_atom() {
        let body = Clause::from_literals(vec![p(1, true), p(2, false)]);
        let boxed = Atom::Modal { index: 2, body };
        let clause = Clause::from_literals(vec![
            Literal::new(boxed.clone(), true),
            Literal::new(boxed, false),
        ]);
        assert!(clause.has_repeated_atoms());
    }
}
