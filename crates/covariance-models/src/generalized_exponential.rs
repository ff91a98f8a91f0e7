//! Generalized exponential kernel
//!
//! `C(tau) = amplitude² · exp(-r^p)` over the weighted Euclidean norm, with the
//! power `p` in `(0, 2]`. `p = 2` is a squared exponential with length-scales
//! shrunk by `√2`; `p = 1` is the Euclidean exponential.

use crate::stationary::{CorrelationProfile, LagNorm, StationaryKernel};
use covariance_core::{Error, KernelFloat, ParameterStore, ParameterValue, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedExponentialProfile<F: KernelFloat = f64> {
    pub power: F,
}

impl<F: KernelFloat> Default for GeneralizedExponentialProfile<F> {
    fn default() -> Self {
        Self { power: F::one() }
    }
}

impl<F: KernelFloat> CorrelationProfile<F> for GeneralizedExponentialProfile<F> {
    const NAME: &'static str = "GeneralizedExponential";
    const NORM: LagNorm = LagNorm::L2;

    #[inline]
    fn correlation(&self, r: F) -> F {
        (-r.powf(self.power)).exp()
    }

    #[inline]
    fn correlation_derivative(&self, r: F) -> F {
        let p = self.power;
        -p * r.powf(p - F::one()) * (-r.powf(p)).exp()
    }

    fn validate(&self) -> Result<()> {
        let two = F::one() + F::one();
        if !(self.power.is_positive_finite() && self.power <= two) {
            return Err(Error::InvalidParameter(format!(
                "power must be in (0, 2], got {}",
                self.power
            )));
        }
        Ok(())
    }

    fn save(&self, store: &mut dyn ParameterStore) {
        store.save("power", ParameterValue::Scalar(self.power.to_f64_lossy()));
    }

    fn load(store: &dyn ParameterStore) -> Result<Self> {
        Ok(Self {
            power: F::from_f64_lossy(store.load_scalar("power")?),
        })
    }

    fn fmt_shape(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ", p={}", self.power)
    }
}

pub type GeneralizedExponential<F = f64> =
    StationaryKernel<GeneralizedExponentialProfile<F>, F>;

impl<F: KernelFloat> StationaryKernel<GeneralizedExponentialProfile<F>, F> {
    /// Generalized exponential kernel with power `p`
    pub fn with_power(scale: Vec<F>, amplitude: Vec<F>, power: F) -> Result<Self> {
        Self::with_profile(GeneralizedExponentialProfile { power }, scale, amplitude)
    }

    pub fn power(&self) -> F {
        self.profile().power
    }
}
