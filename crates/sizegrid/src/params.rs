use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An ordered table of size parameters.
///
/// Duplicates are kept; the driver instantiates one case per entry,
/// duplicates included, in the listed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSet {
    values: Vec<usize>,
}

impl SizeSet {
    pub fn values(vals: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: vals.into_iter().collect(),
        }
    }

    /// The half-open range `[start, end)` stepped by `step`.
    pub fn range(start: usize, end: usize, step: usize) -> Result<Self> {
        if step == 0 {
            bail!("SizeSet::range requires a non-zero step");
        }
        Ok(Self {
            values: (start..end).step_by(step).collect(),
        })
    }

    /// `1, 2, 4, ..., 2^max_exp`, clamped to exponents a usize can hold.
    pub fn powers_of_two(max_exp: u32) -> Self {
        let max_exp = max_exp.min(usize::BITS - 1);
        Self {
            values: (0..=max_exp).map(|exp| 1usize << exp).collect(),
        }
    }

    /// `n` values drawn uniformly from `[0, max]`. The same seed always
    /// produces the same table.
    pub fn sample(n: usize, max: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            values: (0..n).map(|_| rng.gen_range(0..=max)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_preserves_order_and_duplicates() {
        let set = SizeSet::values([3, 1, 3, 0]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 1, 3, 0]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_range_is_half_open() {
        let set = SizeSet::range(0, 10, 3).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_range_rejects_zero_step() {
        assert!(SizeSet::range(0, 10, 0).is_err());
    }

    #[test]
    fn test_powers_of_two() {
        let set = SizeSet::powers_of_two(4);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_powers_of_two_clamps_to_usize_width() {
        let set = SizeSet::powers_of_two(u32::MAX);
        assert_eq!(set.len(), usize::BITS as usize);
        assert_eq!(set.iter().last(), Some(1usize << (usize::BITS - 1)));
    }

    #[test]
    fn test_sample_is_reproducible_from_its_seed() {
        let a = SizeSet::sample(32, 4096, 7);
        let b = SizeSet::sample(32, 4096, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.iter().all(|v| v <= 4096));
    }

    #[test]
    fn test_empty_set() {
        let set = SizeSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
