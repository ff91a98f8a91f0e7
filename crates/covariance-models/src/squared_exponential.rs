//! Squared exponential (Gaussian) kernel
//!
//! `C(tau) = amplitude² · exp(-r² / 2)` with `r` the weighted Euclidean norm.

use crate::stationary::{CorrelationProfile, LagNorm, StationaryKernel};
use covariance_core::KernelFloat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SquaredExponentialProfile;

impl<F: KernelFloat> CorrelationProfile<F> for SquaredExponentialProfile {
    const NAME: &'static str = "SquaredExponential";
    const NORM: LagNorm = LagNorm::L2;

    #[inline]
    fn correlation(&self, r: F) -> F {
        let half = F::from_f64_lossy(0.5);
        (-half * r * r).exp()
    }

    #[inline]
    fn correlation_derivative(&self, r: F) -> F {
        let half = F::from_f64_lossy(0.5);
        -r * (-half * r * r).exp()
    }
}

pub type SquaredExponential<F = f64> = StationaryKernel<SquaredExponentialProfile, F>;
