/*!
Atoms, the things a literal refers to.

An atom is either:
- A propositional atom, one of the variables *A1*, …, *AN*.
- A modal atom, a box *□b* applied to a clause, for *b* one of 1, …, *m*.

```rust
# use mcnf_gen::structures::{atom::Atom, clause::Clause, literal::Literal};
let body = Clause::from_literals(vec![
    Literal::new(Atom::Propositional(2), true),
    Literal::new(Atom::Propositional(1), false),
]);
let boxed = Atom::Modal { index: 1, body };

assert_eq!(boxed.depth(), 1);
assert_eq!(boxed.to_string(), "□1(¬A1 ∨ A2)");
```

Atoms are ordered with every propositional atom before every modal atom.
Propositional atoms are ordered by variable, and modal atoms by box index and then by body.
The order fixes the [canonical form](crate::structures::clause) of a clause.
*/

use crate::structures::clause::Clause;

/// Nesting depth of an atom, a clause, or a formula.
pub type Depth = usize;

/// The index of a propositional variable, from 1.
pub type Variable = u32;

/// The index of a box, from 1.
pub type BoxIndex = u32;

/// An atom, aka. a 'variable' at depth zero.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    /// A propositional variable.
    Propositional(Variable),

    /// A boxed clause.
    Modal { index: BoxIndex, body: Clause },
}

impl Atom {
    /// Zero for a propositional atom, and one more than the depth of the body for a modal atom.
    pub fn depth(&self) -> Depth {
        match self {
            Self::Propositional(_) => 0,
            Self::Modal { body, .. } => body.depth() + 1,
        }
    }

    pub fn is_propositional(&self) -> bool {
        matches!(self, Self::Propositional(_))
    }
}
