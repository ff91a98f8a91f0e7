//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use covariance_kernels::Sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Seeded uniform points in `[-3, 3]^dimension`
pub fn random_sample(size: usize, dimension: usize, seed: u64) -> Sample<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..size * dimension)
        .map(|_| rng.gen_range(-3.0..3.0))
        .collect();
    Sample::new(data, dimension).unwrap()
}
