//! Reproducible train/test partitioning.
//!
//! The shuffle seed is an explicit parameter, never ambient state, so two
//! runs with the same seed and ratio produce identical partitions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Row indices partitioned into training and evaluation sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n_rows` with a seeded rng and carve off the leading
/// `test_fraction` as the held-out partition.
#[must_use]
pub fn train_test_split(n_rows: usize, test_fraction: f64, seed: u64) -> Split {
    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n_rows as f64) * test_fraction.clamp(0.0, 1.0)).round() as usize;
    let n_test = n_test.min(n_rows);
    Split {
        test: indices[..n_test].to_vec(),
        train: indices[n_test..].to_vec(),
    }
}

/// Gather the items at `indices`, in index order.
#[must_use]
pub fn select<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}
