//! Default values of a [Config](super::Config).

use crate::distribution::Weight;

pub const DEPTH: i64 = 2;
pub const CLAUSES: i64 = 4;
pub const VARIABLES: i64 = 4;
pub const BOXES: i64 = 1;
pub const COUNT: i64 = 1;

/// Attempts at a clause without repeated atoms before settling for the last.
pub const CLAUSE_ATTEMPTS: i64 = 100;

/// Attempts at a new clause, per clause requested, before settling for a short formula.
pub const FORMULA_ATTEMPTS_PER_CLAUSE: i64 = 10;

/// The greatest permitted depth.
pub const DEPTH_MAX: i64 = 64;

/// The greatest number of clauses which may be requested of a formula.
pub const CLAUSES_MAX: i64 = 1_000_000;

/// The greatest number of formulas which may be requested of a run.
pub const COUNT_MAX: i64 = 1_000_000;

/// Clause lengths of two or three at depth 0, one or two at depth 1, and one at depth 2.
pub fn lengths() -> Vec<Vec<Weight>> {
    vec![vec![0.0, 2.0, 2.0], vec![2.0, 4.0], vec![6.0]]
}

/// At depth 0 every literal is propositional, regardless, while at depth 1 a clause of length 1 is modal and a clause of length 2 mixed.
/// Every literal of a clause at depth 2 is modal.
pub fn mix() -> Vec<Vec<Vec<Weight>>> {
    vec![
        vec![vec![], vec![0.0, 2.0, 0.0], vec![0.0, 2.0, 0.0, 0.0]],
        vec![vec![2.0, 0.0], vec![0.0, 4.0, 0.0]],
    ]
}
