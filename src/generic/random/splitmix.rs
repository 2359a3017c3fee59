//! SplitMix64, used to expand one seed into a seed for each task of a [parallel batch](crate::batch).
//!
//! See <https://prng.di.unimi.it/splitmix64.c>.

const GOLDEN_GAMMA: u64 = 0x9e3779b97f4a7c15;

fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// The first `count` outputs of SplitMix64 seeded with `base`.
///
/// ```rust
/// # use mcnf_gen::generic::random::derive_seeds;
/// let seeds = derive_seeds(0, 2);
/// assert_eq!(seeds, vec![0xe220a8397b1dcdaf, 0x6e789e6aa1b965f4]);
/// ```
pub fn derive_seeds(base: u64, count: usize) -> Vec<u64> {
    let mut state = base;
    (0..count)
        .map(|_| {
            state = state.wrapping_add(GOLDEN_GAMMA);
            mix(state)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed() {
        assert_eq!(
            derive_seeds(0, 3),
            vec![0xe220a8397b1dcdaf, 0x6e789e6aa1b965f4, 0x06c45d188009454f]
        );
    }

    #[test]
    fn prefix_stable() {
        let long = derive_seeds(1234, 10);
        let short = derive_seeds(1234, 4);
        assert_eq!(&long[..4], short.as_slice());
    }
}
