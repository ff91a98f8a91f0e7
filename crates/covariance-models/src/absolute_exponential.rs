//! Absolute exponential kernel
//!
//! ```text
//! C(tau) = amplitude² · exp(-Σ |tau_i / scale_i|)
//! ```
//!
//! The weighted L1 norm makes the kernel separable, `C(tau) = amplitude² ·
//! Π exp(-|tau_i| / scale_i)`, and non-differentiable wherever a lag
//! coordinate is zero. At exactly zero lag the gradient is the one-sided value
//! `-amplitude² / scale_i`; this is a fixed convention, not a derivative.

use crate::stationary::{CorrelationProfile, LagNorm, StationaryKernel};
use covariance_core::KernelFloat;

/// Correlation shape `ρ(r) = exp(-r)` over the weighted L1 norm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbsoluteExponentialProfile;

impl<F: KernelFloat> CorrelationProfile<F> for AbsoluteExponentialProfile {
    const NAME: &'static str = "AbsoluteExponential";
    const NORM: LagNorm = LagNorm::L1;

    #[inline]
    fn correlation(&self, r: F) -> F {
        (-r).exp()
    }

    #[inline]
    fn correlation_derivative(&self, r: F) -> F {
        -(-r).exp()
    }
}

/// Absolute exponential (weighted-L1 exponential) covariance kernel
pub type AbsoluteExponential<F = f64> = StationaryKernel<AbsoluteExponentialProfile, F>;
