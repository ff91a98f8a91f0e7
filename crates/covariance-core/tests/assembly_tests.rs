//! Matrix assembly, finite differences and registry dispatch over a
//! user-defined kernel

mod common;

use common::{assert_relative_eq, GaussianKernel};
use covariance_core::{
    centered_partial_gradient, discretize, discretize_cross, CovarianceKernel, Error,
    KernelRegistry, MemoryStore, Sample,
};
use proptest::prelude::*;

fn grid_sample() -> Sample<f64> {
    Sample::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.0, 2.0], [-1.0, 0.5]]).unwrap()
}

#[test]
fn test_discretize_user_kernel() {
    let kernel = GaussianKernel::new(vec![1.0, 2.0], 3.0);
    let matrix = discretize(&kernel, &grid_sample()).unwrap();

    assert_eq!(matrix.shape(), (4, 4));
    for i in 0..4 {
        assert_eq!(matrix[(i, i)], 9.0);
    }
    assert_relative_eq!(matrix[(0, 1)], 9.0 * (-1.0f64).exp(), epsilon = 1e-14);
    assert_relative_eq!(matrix[(2, 0)], 9.0 * (-1.0f64).exp(), epsilon = 1e-14);
    assert_relative_eq!(matrix[(1, 2)], 9.0 * (-2.0f64).exp(), epsilon = 1e-14);
}

#[test]
fn test_discretize_empty_sample() {
    let kernel = GaussianKernel::new(vec![1.0], 1.0);
    let sample = Sample::new(Vec::new(), 1).unwrap();
    let matrix = discretize(&kernel, &sample).unwrap();
    assert_eq!(matrix.shape(), (0, 0));
}

#[test]
fn test_discretize_cross_dimension_errors() {
    let kernel = GaussianKernel::new(vec![1.0, 1.0], 1.0);
    let good = grid_sample();
    let bad = Sample::new(vec![0.0; 3], 3).unwrap();

    assert!(matches!(
        discretize_cross(&kernel, &bad, &good),
        Err(Error::DimensionMismatch { argument: "left", .. })
    ));
    assert!(matches!(
        discretize_cross(&kernel, &good, &bad),
        Err(Error::DimensionMismatch { argument: "right", .. })
    ));
}

#[test]
fn test_finite_difference_matches_gaussian_gradient() {
    let kernel = GaussianKernel::new(vec![0.8, 1.7], 1.2);
    let s = [0.4, -1.1];
    let t = [-0.3, 0.2];
    let analytic = kernel.partial_gradient(&s, &t).unwrap();
    let numeric = centered_partial_gradient(&kernel, &s, &t, 1e-6).unwrap();

    assert_eq!(numeric.shape(), (2, 1));
    for i in 0..2 {
        assert_relative_eq!(numeric[(i, 0)], analytic[(i, 0)], max_relative = 1e-6);
    }
}

#[test]
fn test_finite_difference_rejects_bad_input() {
    let kernel = GaussianKernel::new(vec![1.0, 1.0], 1.0);
    assert!(matches!(
        centered_partial_gradient(&kernel, &[0.0], &[0.0, 0.0], 1e-6),
        Err(Error::DimensionMismatch { argument: "s", .. })
    ));
    assert!(matches!(
        centered_partial_gradient(&kernel, &[0.0, 0.0], &[0.0], 1e-6),
        Err(Error::DimensionMismatch { argument: "t", .. })
    ));
    assert!(matches!(
        centered_partial_gradient(&kernel, &[0.0, 0.0], &[0.0, 0.0], 0.0),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_registry_round_trip_user_kernel() {
    let registry = KernelRegistry::new();
    assert!(!registry.register(GaussianKernel::NAME, GaussianKernel::load));

    let kernel = GaussianKernel::new(vec![0.5, 4.0], 2.0);
    let mut store = MemoryStore::new();
    kernel.save(&mut store);

    let json = store.to_json().unwrap();
    let reloaded = registry.load(&MemoryStore::from_json(&json).unwrap()).unwrap();
    assert_eq!(reloaded.class_name(), "Gaussian");
    assert_eq!(reloaded.parameters(), kernel.parameters());
    assert_eq!(reloaded.to_string(), kernel.to_string());
}

proptest! {
    // Property: assembled matrices are symmetric with the variance on the diagonal
    #[test]
    fn prop_discretize_symmetric(
        data in prop::collection::vec(-10.0f64..10.0, 0..60),
        amplitude in 0.1f64..3.0,
    ) {
        let n = data.len() / 3;
        let sample = Sample::new(data[..n * 3].to_vec(), 3).unwrap();
        let kernel = GaussianKernel::new(vec![1.0, 0.5, 2.0], amplitude);
        let matrix = discretize(&kernel, &sample).unwrap();

        prop_assert_eq!(matrix.shape(), (n, n));
        for i in 0..n {
            prop_assert!((matrix[(i, i)] - amplitude * amplitude).abs() < 1e-12);
            for j in 0..i {
                prop_assert_eq!(matrix[(i, j)], matrix[(j, i)]);
            }
        }
    }
}
