//! Covariance matrix assembly with the concrete kernels

mod common;

use common::{assert_relative_eq, init_tracing, random_sample};
use covariance_kernels::prelude::*;
use nalgebra::DMatrix;
use std::sync::Arc;
use std::thread;

#[test]
fn test_matrix_is_symmetric_with_inflated_diagonal() {
    init_tracing();
    let kernel = AbsoluteExponential::with_scale_and_amplitude(vec![1.0, 0.5], vec![2.0])
        .unwrap()
        .with_nugget_factor(0.25)
        .unwrap();
    let sample = random_sample(40, 2, 7);
    let matrix = discretize(&kernel, &sample).unwrap();

    assert_eq!(matrix.shape(), (40, 40));
    for i in 0..40 {
        assert_eq!(matrix[(i, i)], 5.0);
        for j in 0..i {
            assert_eq!(matrix[(i, j)], matrix[(j, i)]);
            assert!(matrix[(i, j)] < 4.0);
        }
    }
}

#[test]
fn test_matrix_entries_match_pointwise_evaluation() {
    let kernel = MaternModel::with_scale_and_amplitude(vec![0.7, 1.3, 2.0], vec![1.1]).unwrap();
    let sample = random_sample(15, 3, 11);
    let matrix = discretize(&kernel, &sample).unwrap();

    for i in 0..sample.len() {
        for j in 0..sample.len() {
            let tau: Vec<f64> = sample
                .row(i)
                .iter()
                .zip(sample.row(j))
                .map(|(a, b)| a - b)
                .collect();
            assert_relative_eq!(
                matrix[(i, j)],
                kernel.compute_as_scalar(&tau).unwrap(),
                max_relative = 1e-14
            );
        }
    }
}

#[test]
fn test_cross_covariance() {
    let kernel = SquaredExponential::new(2).unwrap();
    let left = random_sample(6, 2, 1);
    let right = random_sample(9, 2, 2);
    let cross = discretize_cross(&kernel, &left, &right).unwrap();

    assert_eq!(cross.shape(), (6, 9));
    for i in 0..6 {
        for j in 0..9 {
            assert_eq!(
                cross[(i, j)],
                kernel.compute_as_scalar_between(left.row(i), right.row(j))
            );
        }
    }

    // Same sample on both sides reproduces the symmetric matrix
    let full = discretize(&kernel, &left).unwrap();
    let self_cross = discretize_cross(&kernel, &left, &left).unwrap();
    assert_eq!(full, self_cross);
}

#[test]
fn test_sample_dimension_is_checked() {
    let kernel = AbsoluteExponential::new(3).unwrap();
    let sample = random_sample(4, 2, 3);
    match discretize(&kernel, &sample) {
        Err(Error::DimensionMismatch {
            argument,
            expected,
            actual,
        }) => {
            assert_eq!(argument, "sample");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn test_boxed_kernels_assemble() {
    let kernels: Vec<Box<dyn CovarianceKernel<f64>>> = vec![
        Box::new(AbsoluteExponential::new(2).unwrap()),
        Box::new(SphericalModel::with_radius(vec![1.0, 1.0], vec![1.0], 3.0).unwrap()),
    ];
    let sample = random_sample(10, 2, 5);
    for kernel in &kernels {
        let matrix = discretize(kernel.as_ref(), &sample).unwrap();
        assert_eq!(matrix, matrix.transpose());
    }
}

#[test]
fn test_kernel_shared_across_threads() {
    let kernel: Arc<dyn CovarianceKernel<f64>> = Arc::new(
        AbsoluteExponential::with_scale_and_amplitude(vec![1.0, 2.0], vec![1.5]).unwrap(),
    );
    let sample = Arc::new(random_sample(30, 2, 9));
    let expected: DMatrix<f64> = discretize(kernel.as_ref(), &*sample).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let kernel = Arc::clone(&kernel);
            let sample = Arc::clone(&sample);
            thread::spawn(move || discretize(kernel.as_ref(), &*sample).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    use covariance_kernels::discretize_parallel;

    init_tracing();
    let kernels: Vec<Box<dyn CovarianceKernel<f64>>> = vec![
        Box::new(AbsoluteExponential::with_scale(vec![0.5, 1.5, 1.0]).unwrap()),
        Box::new(GeneralizedExponential::with_power(vec![1.0; 3], vec![2.0], 0.8).unwrap()),
    ];
    let sample = random_sample(64, 3, 13);
    for kernel in &kernels {
        let sequential = discretize(kernel.as_ref(), &sample).unwrap();
        let parallel = discretize_parallel(kernel.as_ref(), &sample).unwrap();
        assert_eq!(sequential, parallel);
    }
}
