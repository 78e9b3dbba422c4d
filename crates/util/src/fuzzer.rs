use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex};

/// A single step in a randomized tree workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOp {
    Insert(i64),
    Erase(i64),
    Find(i64),
}

/// A fuzzer for generating random tree workloads.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use balance_forest_util::Fuzzer;
///
/// let fuzzer = Fuzzer::new(Some([7u8; 32]));
///
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// let (lo, hi) = fuzzer.random_interval(-100, 100);
/// assert!(lo <= hi);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(min..=max)
    }

    /// Pick a random element from a slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let mut rng = self.rng.lock().unwrap();
        let idx = rng.gen_range(0..elements.len());
        &elements[idx]
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_bool(probability)
    }

    /// Generate `count` keys drawn uniformly from [min, max]. Duplicates are
    /// deliberately possible so callers exercise the duplicate-insert path.
    pub fn random_keys(&self, count: usize, min: i64, max: i64) -> Vec<i64> {
        (0..count).map(|_| self.random_int(min, max)).collect()
    }

    /// Generate a random closed interval with endpoints in [min, max],
    /// returned already ordered so `lo <= hi`.
    pub fn random_interval(&self, min: i64, max: i64) -> (i64, i64) {
        let a = self.random_int(min, max);
        let b = self.random_int(min, max);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Generate a workload of `count` operations over keys in [min, max].
    ///
    /// Inserts dominate so trees actually grow; erases and finds hit both
    /// present and absent keys since the key range is shared.
    pub fn ops(&self, count: usize, min: i64, max: i64) -> Vec<TreeOp> {
        (0..count)
            .map(|_| {
                let key = self.random_int(min, max);
                match self.random_int(0, 9) {
                    0..=4 => TreeOp::Insert(key),
                    5..=7 => TreeOp::Erase(key),
                    _ => TreeOp::Find(key),
                }
            })
            .collect()
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let fuzzer = Fuzzer::new(None);

        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!(n >= 1 && n <= 10);
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let seed = [1u8; 32];

        let fuzzer1 = Fuzzer::new(Some(seed));
        let fuzzer2 = Fuzzer::new(Some(seed));

        for _ in 0..10 {
            assert_eq!(fuzzer1.random_int(0, 1000), fuzzer2.random_int(0, 1000));
        }
        assert_eq!(fuzzer1.ops(50, -20, 20), fuzzer2.ops(50, -20, 20));
    }

    #[test]
    fn test_fuzzer_random_interval_ordered() {
        let fuzzer = Fuzzer::new(Some([3u8; 32]));

        for _ in 0..100 {
            let (lo, hi) = fuzzer.random_interval(-50, 50);
            assert!(lo <= hi);
        }
    }

    #[test]
    fn test_fuzzer_ops_mix() {
        let fuzzer = Fuzzer::new(Some([9u8; 32]));
        let ops = fuzzer.ops(500, 0, 100);
        assert_eq!(ops.len(), 500);

        let inserts = ops
            .iter()
            .filter(|op| matches!(op, TreeOp::Insert(_)))
            .count();
        assert!(inserts > 0 && inserts < 500);
    }

    #[test]
    fn test_fuzzer_pick() {
        let fuzzer = Fuzzer::new(None);
        let choices = vec!["a", "b", "c"];

        for _ in 0..100 {
            let picked = fuzzer.pick(&choices);
            assert!(choices.contains(picked));
        }
    }
}
