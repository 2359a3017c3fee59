/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for tuning distribution tables and/or fixing issues.

Note, no log implementation is provided by the library.
The `mcnf_gen` binary installs [env_logger](https://docs.rs/env_logger) when built with the `log` feature, e.g. `RUST_LOG=clause=debug`.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [sampling](crate::distribution) from a table.
    pub const SAMPLER: &str = "sampler";

    /// Logs related to the [clause builder](crate::procedures::clause).
    pub const CLAUSE: &str = "clause";

    /// Logs related to the [formula assembler](crate::procedures::formula).
    pub const FORMULA: &str = "formula";

    /// Logs related to [generation](crate::procedures::generate) of formulas.
    pub const DRIVER: &str = "driver";

    /// Logs related to [parallel batches](crate::batch).
    pub const BATCH: &str = "batch";
}
