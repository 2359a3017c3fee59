//! Sources of randomness.

mod minimal_pcg;
mod splitmix;

pub use minimal_pcg::{MinimalPCG32, DEFAULT_STREAM};
pub use splitmix::derive_seeds;
