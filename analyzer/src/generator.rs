use rand::{rngs::StdRng, Rng, SeedableRng};

/// Builds a deterministic synthetic series for demo and load runs.
pub fn build_series(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0.0..1000.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_count() {
        assert_eq!(build_series(128, 0).len(), 128);
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        assert_eq!(build_series(32, 9), build_series(32, 9));
        assert_ne!(build_series(32, 9), build_series(32, 10));
    }
}
