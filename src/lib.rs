//! A library for generating random modal formulas in conjunctive normal form.
//!
//! mcnf_gen generates formulas in the modal 3CNF style: conjunctions of clauses, where each clause is a disjunction of literals, and a literal is either a (negated) propositional variable or a (negated) box over a clause of lesser depth.
//! The shape of generated formulas is controlled by a pair of weight tables, one over the length of a clause and one over how many literals of a clause are propositional, both indexed by depth.
//!
//! Formulas are intended as benchmarks for modal satisfiability solvers, and so generation is reproducible: a fixed config and seed always give the same formulas.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [generator].
//!
//! Generators are built from a [configuration](crate::config), which is validated before any randomness is used.
//! The generator then [builds literals](crate::procedures::literal), [builds clauses](crate::procedures::clause) from literals, and [assembles formulas](crate::procedures::formula) from clauses, all drawing from a single owned source of randomness.
//!
//! Useful starting points, then, may be:
//! - The [procedures] to see how a formula is built.
//! - The [distribution] module to see how weight tables are sampled.
//! - The [structures] to familiarise yourself with atoms, literals, clauses, and formulas.
//! - The [notation] module to see how formulas are written for solvers.
//!
//! # Examples
//!
//! + Generate a formula with the default parameters and write it out.
//!
//! ```rust
//! # use mcnf_gen::config::Config;
//! # use mcnf_gen::generator::Generator;
//! let mut generator = Generator::from_seed(Config::default(), Some(2024)).unwrap();
//! let formulas = generator.generate();
//!
//! assert_eq!(formulas.len(), 1);
//! assert!(formulas[0].depth() <= 2);
//!
//! let text = formulas[0].to_string();
//! assert!(text.ends_with(")."));
//! ```
//!
//! + Generate purely propositional 3CNF formulas, and check each clause for repeated variables.
//!
//! ```rust
//! # use mcnf_gen::config::Config;
//! # use mcnf_gen::distribution::{LengthTable, MixTable};
//! # use mcnf_gen::generator::Generator;
//! let mut config = Config::default();
//! config.depth.value = 0;
//! config.clauses.value = 10;
//! config.variables.value = 20;
//! config.lengths = LengthTable::from_raw(vec![vec![0.0, 0.0, 1.0]]).unwrap();
//! config.mix = MixTable::default();
//!
//! let mut generator = Generator::from_seed(config, Some(7)).unwrap();
//! let formula = generator.generate_formula();
//!
//! assert_eq!(formula.len(), 10);
//! for clause in formula.clauses() {
//!     assert_eq!(clause.len(), 3);
//!     assert!(!clause.has_repeated_atoms());
//! }
//! ```
//!
//! # Degradation
//!
//! Some configurations ask for more than is possible, e.g. clauses of length three over two variables.
//! Generation then degrades rather than fails, after a bounded number of attempts, and returns a clause with repeated atoms or a formula with fewer clauses than requested.
//! See [Formula::is_degraded](crate::structures::formula::Formula::is_degraded) and the [counters](crate::generator::Counters).
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of clauses returned with repeated atoms can be found with `RUST_LOG=clause=debug …` or,
//! - The seed of an unseeded run can be found with `RUST_LOG=driver=info …`
//!

#![allow(clippy::single_match)]
#![allow(clippy::match_bool)]

pub mod batch;
pub mod config;
pub mod distribution;
pub mod generator;
pub mod generic;
pub mod misc;
pub mod notation;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
