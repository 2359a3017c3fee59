//! Error types used in the library.
//!
//! - Configuration errors are raised before any randomness is consumed, and always surface to the caller.
//! - Parse errors arise only when distribution tables are read from text, e.g. from the command line.
//!
//! Degraded results (a clause with a repeated atom, or a formula short of the requested clauses) are *not* errors.
//! See [Clause::is_well_formed](crate::structures::clause::Clause::is_well_formed) and [Formula::is_degraded](crate::structures::formula::Formula::is_degraded).
//!
//! [ErrorKind] gathers both, for callers such as the command line which may see either.

use std::fmt;

use crate::structures::atom::Depth;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Configuration(ConfigurationError),
    Parse(ParseError),
}

/// Invalid or inconsistent parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    /// The named parameter is outside its bounds.
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The clause length table has fewer levels than `depth + 1`.
    ShallowLengthTable { depth: Depth, levels: usize },

    /// The literal mix row for clauses of `length` at `depth` has more outcomes than `length + 1`.
    ///
    /// Outcome `i` of a row is a count of `i` propositional literals, and so no row may allow more propositional literals than the clause has.
    MixRowTooLong {
        depth: Depth,
        length: usize,
        outcomes: usize,
    },

    /// A weight which is negative, infinite, or not a number.
    ///
    /// The position is the path of indices to the weight in the table.
    InvalidWeight { position: Vec<usize>, weight: f64 },

    /// Weights which are each finite, though whose total is not.
    ///
    /// The position is the path of indices to the weights in the table.
    InfiniteTotal { position: Vec<usize> },
}

impl From<ConfigurationError> for ErrorKind {
    fn from(e: ConfigurationError) -> Self {
        ErrorKind::Configuration(e)
    }
}

/// Noted errors when reading a distribution table from text.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The text is not a (suitably nested) array of numbers.
    Table { table: &'static str, reason: String },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} requires a value between {min} and {max}, found {value}"),
            Self::ShallowLengthTable { depth, levels } => write!(
                f,
                "clause length distribution has {levels} level(s), but depth {depth} requires {}",
                depth + 1
            ),
            Self::MixRowTooLong {
                depth,
                length,
                outcomes,
            } => write!(
                f,
                "literal mix distribution for depth {depth} and length {length} has {outcomes} outcomes, at most {} allowed",
                length + 1
            ),
            Self::InvalidWeight { position, weight } => {
                write!(f, "invalid weight {weight} at {position:?}")
            }
            Self::InfiniteTotal { position } => {
                write!(f, "weights at {position:?} do not have a finite total")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { table, reason } => write!(f, "invalid {table} distribution: {reason}"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration error: {e}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl std::error::Error for ParseError {}

impl std::error::Error for ErrorKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_gathers_both() {
        let configuration: ErrorKind = ConfigurationError::InfiniteTotal { position: vec![1] }.into();
        assert_eq!(
            configuration.to_string(),
            "configuration error: weights at [1] do not have a finite total"
        );

        let parse: ErrorKind = ParseError::Table {
            table: "clause length",
            reason: "EOF".to_string(),
        }
        .into();
        assert_eq!(parse.to_string(), "parse error: invalid clause length distribution: EOF");
    }
}
