/*!
Distributions which shape the structure of a formula.

Two tables are used:
- A [length table](LengthTable), indexed by depth, with weights over the length of a clause.
- A [mix table](MixTable), indexed by depth and then clause length, with weights over how many literals of a clause are propositional.

For example, the tables

```text
lengths: [[0, 2, 2], [2, 4], [6]]
mix:     [[[], [0, 2, 0], [0, 2, 0, 0]], [[2, 0], [0, 4, 0]]]
```

give clauses at depth 2 a single literal, clauses at depth 1 one or two literals (at odds 1 : 2), and so on.
At depth 1 a clause of two literals always has one propositional literal, while at depth 2 the mix table has no row and so every literal is modal.

# Fallbacks

Lookups fail closed.
A depth or length outside a table, or an empty vector of weights, gives a fixed outcome in place of an error:
- [FALLBACK_CLAUSE_LENGTH] for lengths.
- [FALLBACK_PROPOSITIONAL_COUNT] for propositional counts.

And a vector of weights which are all zero gives its final outcome.
*/

mod tables;
mod weights;

pub use tables::{
    DepthAndLengthIndexedTable, DepthIndexedTable, LengthTable, MixTable, FALLBACK_CLAUSE_LENGTH,
    FALLBACK_PROPOSITIONAL_COUNT,
};
pub use weights::{Weight, Weights};
