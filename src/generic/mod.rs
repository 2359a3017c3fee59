//! Generic structures and procedures, not specific to modal formulas.

pub mod random;
pub mod retry;
