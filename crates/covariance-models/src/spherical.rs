//! Spherical kernel
//!
//! Compactly supported: with `x = r / radius`,
//!
//! ```text
//! ρ(r) = 1 - 1.5 x + 0.5 x³   for x < 1
//! ρ(r) = 0                    otherwise
//! ```
//!
//! `r` is the weighted Euclidean norm of the lag.

use crate::stationary::{CorrelationProfile, LagNorm, StationaryKernel};
use covariance_core::{Error, KernelFloat, ParameterStore, ParameterValue, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalProfile<F: KernelFloat = f64> {
    pub radius: F,
}

impl<F: KernelFloat> Default for SphericalProfile<F> {
    fn default() -> Self {
        Self { radius: F::one() }
    }
}

impl<F: KernelFloat> CorrelationProfile<F> for SphericalProfile<F> {
    const NAME: &'static str = "SphericalModel";
    const NORM: LagNorm = LagNorm::L2;

    fn correlation(&self, r: F) -> F {
        let x = r / self.radius;
        if x >= F::one() {
            return F::zero();
        }
        let half = F::from_f64_lossy(0.5);
        let three_halves = F::from_f64_lossy(1.5);
        F::one() - three_halves * x + half * x * x * x
    }

    fn correlation_derivative(&self, r: F) -> F {
        let x = r / self.radius;
        if x >= F::one() {
            return F::zero();
        }
        -F::from_f64_lossy(1.5) * (F::one() - x * x) / self.radius
    }

    fn validate(&self) -> Result<()> {
        if !self.radius.is_positive_finite() {
            return Err(Error::InvalidParameter(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        Ok(())
    }

    fn save(&self, store: &mut dyn ParameterStore) {
        store.save("radius", ParameterValue::Scalar(self.radius.to_f64_lossy()));
    }

    fn load(store: &dyn ParameterStore) -> Result<Self> {
        Ok(Self {
            radius: F::from_f64_lossy(store.load_scalar("radius")?),
        })
    }

    fn fmt_shape(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ", radius={}", self.radius)
    }
}

pub type SphericalModel<F = f64> = StationaryKernel<SphericalProfile<F>, F>;

impl<F: KernelFloat> StationaryKernel<SphericalProfile<F>, F> {
    /// Spherical kernel vanishing beyond weighted distance `radius`
    pub fn with_radius(scale: Vec<F>, amplitude: Vec<F>, radius: F) -> Result<Self> {
        Self::with_profile(SphericalProfile { radius }, scale, amplitude)
    }

    pub fn radius(&self) -> F {
        self.profile().radius
    }
}
