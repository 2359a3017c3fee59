/// Counts for various things which count, roughly.
///
/// Counts accumulate over every formula a generator builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Clauses returned by the clause builder, at any depth.
    pub clauses: usize,

    /// Attempts made by the clause builder, at any depth.
    pub clause_attempts: usize,

    /// Clauses returned with repeated atoms after the attempt budget was spent.
    pub degraded_clauses: usize,

    /// Clauses discarded by the formula assembler as already present.
    pub repeated_clauses: usize,

    /// Formulas returned by the formula assembler.
    pub formulas: usize,

    /// Formulas returned with fewer clauses than requested.
    pub short_formulas: usize,
}
