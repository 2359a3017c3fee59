//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/> (`pcg32_random_r` and `pcg32_srandom_r`), implemented to satisfy the [RngCore] and [SeedableRng] traits.[^note]
//!
//! PCG(32) is the default source of (pseudo)random numbers for a [generator](crate::generator).
//! As the algorithm is fixed here, rather than borrowed from whichever generator the [rand] crate happens to ship, a seed determines the same sequence of draws on every platform and every version of the crate.
//! And so, the same formulas.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// The stream used when seeding from a single integer, as in the PCG demo programs.
pub const DEFAULT_STREAM: u64 = 54;

/// State and increment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    /// A generator on the given stream, following `pcg32_srandom_r`.
    pub fn from_state_and_stream(state: u64, stream: u64) -> Self {
        let mut rng = MinimalPCG32 {
            state: 0,
            inc: (stream << 1) | 1,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(state);
        rng.step();
        rng
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);
    }
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    /// The initial state, followed by the stream, each little-endian.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0; 8];
        let mut stream = [0; 8];
        state.copy_from_slice(&seed[..8]);
        stream.copy_from_slice(&seed[8..]);
        Self::from_state_and_stream(u64::from_le_bytes(state), u64::from_le_bytes(stream))
    }

    /// Uses the integer as the initial state, on [DEFAULT_STREAM].
    ///
    /// This replaces the default expansion of [SeedableRng] so a seed given on the command line is exactly the `initstate` of the C implementation.
    fn seed_from_u64(state: u64) -> Self {
        Self::from_state_and_stream(state, DEFAULT_STREAM)
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    // The output of pcg32-demo from the reference distribution.
    #[test]
    fn reference_sequence() {
        let mut rng = MinimalPCG32::from_state_and_stream(42, 54);
        assert_eq!(rng.next_u32(), 0xa15c02b7);
        assert_eq!(rng.next_u32(), 0x7b47f409);
        assert_eq!(rng.next_u32(), 0xba1d3330);
        assert_eq!(rng.next_u32(), 0x83d2f293);
        assert_eq!(rng.next_u32(), 0xbfa4784b);
        assert_eq!(rng.next_u32(), 0xcbed606e);
    }

    #[test]
    fn seven_seed() {
        let mut seven_seed = MinimalPCG32::seed_from_u64(7);
        assert_eq!(seven_seed.next_u64(), 0x6c327fbca454b9c3);
        assert_eq!(seven_seed.next_u64(), 0xb7666de2198bc4fd);
        assert_eq!(seven_seed.next_u64(), 0x7d8e9eefb92c3a58);
    }

    #[test]
    fn seed_bytes_agree_with_integer_seed() {
        let mut bytes = [0; 16];
        bytes[..8].copy_from_slice(&42_u64.to_le_bytes());
        bytes[8..].copy_from_slice(&DEFAULT_STREAM.to_le_bytes());

        let mut from_bytes = MinimalPCG32::from_seed(bytes);
        let mut from_integer = MinimalPCG32::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(from_bytes.next_u32(), from_integer.next_u32());
        }
    }
}
