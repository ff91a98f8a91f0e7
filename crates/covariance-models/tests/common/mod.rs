//! Shared utilities for integration tests

#![allow(dead_code)]

use covariance_core::CovarianceKernel;
use covariance_models::{
    AbsoluteExponential, GeneralizedExponential, MaternModel, MaternSmoothness, SphericalModel,
    SquaredExponential,
};

/// Number of kernel variants built by [`build_variant`]
pub const VARIANT_COUNT: usize = 7;

/// Build variant `index` with the given parameters
///
/// `shape` is mapped onto the variant's extra parameter where it has one:
/// the generalized-exponential power (0.5 + 1.5 · shape) and the spherical
/// radius (1 + 4 · shape).
pub fn build_variant(
    index: usize,
    scale: Vec<f64>,
    amplitude: f64,
    nugget: f64,
    shape: f64,
) -> Box<dyn CovarianceKernel<f64>> {
    let amplitude = vec![amplitude];
    match index % VARIANT_COUNT {
        0 => Box::new(
            AbsoluteExponential::with_scale_and_amplitude(scale, amplitude)
                .unwrap()
                .with_nugget_factor(nugget)
                .unwrap(),
        ),
        1 => Box::new(
            SquaredExponential::with_scale_and_amplitude(scale, amplitude)
                .unwrap()
                .with_nugget_factor(nugget)
                .unwrap(),
        ),
        2 => Box::new(
            MaternModel::with_smoothness(scale, amplitude, MaternSmoothness::Half)
                .unwrap()
                .with_nugget_factor(nugget)
                .unwrap(),
        ),
        3 => Box::new(
            MaternModel::with_smoothness(scale, amplitude, MaternSmoothness::ThreeHalves)
                .unwrap()
                .with_nugget_factor(nugget)
                .unwrap(),
        ),
        4 => Box::new(
            MaternModel::with_smoothness(scale, amplitude, MaternSmoothness::FiveHalves)
                .unwrap()
                .with_nugget_factor(nugget)
                .unwrap(),
        ),
        5 => Box::new(
            GeneralizedExponential::with_power(scale, amplitude, 0.5 + 1.5 * shape)
                .unwrap()
                .with_nugget_factor(nugget)
                .unwrap(),
        ),
        _ => Box::new(
            SphericalModel::with_radius(scale, amplitude, 1.0 + 4.0 * shape)
                .unwrap()
                .with_nugget_factor(nugget)
                .unwrap(),
        ),
    }
}

/// Weighted Euclidean norm of `tau`
pub fn weighted_l2(tau: &[f64], scale: &[f64]) -> f64 {
    tau.iter()
        .zip(scale)
        .map(|(t, theta)| (t / theta) * (t / theta))
        .sum::<f64>()
        .sqrt()
}
