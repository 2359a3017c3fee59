//! Various procedures for building formulas with a generator.
//!
//! For the most part these are methods accessed via a generator, and primarily placed here for documentation.
//!
//! The procedures call each other recursively: a [formula](formula) is assembled from clauses, a [clause](clause) is built from literals, and a modal [literal](literal) wraps a clause of lesser depth.

pub mod clause;
pub mod formula;
pub mod generate;
pub mod literal;
