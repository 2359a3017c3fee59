/*!
Abstract structures of a modal formula.

- [Atoms](atom) are propositional variables or boxed clauses.
- [Literals](literal) pair an atom with a polarity.
- [Clauses](clause) are disjunctions of literals, kept in canonical order.
- [Formulas](formula) are conjunctions of distinct clauses.

The structures are plain values.
Each is built once by the [generator](crate::generator) and is not mutated afterwards.

Every structure implements [Display](std::fmt::Display) in the default [notation](crate::notation::Notation::Unicode).
*/

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
