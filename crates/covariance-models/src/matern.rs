//! Matérn kernels with half-integer smoothness
//!
//! Only the half-integer cases have closed forms without Bessel functions:
//!
//! | ν   | ρ(r)                                  |
//! |-----|---------------------------------------|
//! | 1/2 | `exp(-r)`                             |
//! | 3/2 | `(1 + √3 r) exp(-√3 r)`               |
//! | 5/2 | `(1 + √5 r + 5r²/3) exp(-√5 r)`       |
//!
//! `r` is the weighted Euclidean norm of the lag.

use crate::stationary::{CorrelationProfile, LagNorm, StationaryKernel};
use covariance_core::{Error, KernelFloat, ParameterStore, ParameterValue, Result};
use std::fmt;

/// Supported smoothness values ν
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaternSmoothness {
    /// ν = 1/2, the exponential kernel over the Euclidean norm
    Half,
    /// ν = 3/2, once mean-square differentiable
    #[default]
    ThreeHalves,
    /// ν = 5/2, twice mean-square differentiable
    FiveHalves,
}

impl MaternSmoothness {
    pub fn nu(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::ThreeHalves => 1.5,
            Self::FiveHalves => 2.5,
        }
    }

    /// Smoothness for a numeric ν, which must be 0.5, 1.5 or 2.5
    pub fn from_nu(nu: f64) -> Result<Self> {
        match nu {
            x if x == 0.5 => Ok(Self::Half),
            x if x == 1.5 => Ok(Self::ThreeHalves),
            x if x == 2.5 => Ok(Self::FiveHalves),
            _ => Err(Error::InvalidParameter(format!(
                "Matern smoothness must be 0.5, 1.5 or 2.5, got {nu}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaternProfile {
    pub smoothness: MaternSmoothness,
}

impl<F: KernelFloat> CorrelationProfile<F> for MaternProfile {
    const NAME: &'static str = "MaternModel";
    const NORM: LagNorm = LagNorm::L2;

    fn correlation(&self, r: F) -> F {
        match self.smoothness {
            MaternSmoothness::Half => (-r).exp(),
            MaternSmoothness::ThreeHalves => {
                let x = F::from_f64_lossy(3f64.sqrt()) * r;
                (F::one() + x) * (-x).exp()
            }
            MaternSmoothness::FiveHalves => {
                let x = F::from_f64_lossy(5f64.sqrt()) * r;
                (F::one() + x + x * x / F::from_f64_lossy(3.0)) * (-x).exp()
            }
        }
    }

    fn correlation_derivative(&self, r: F) -> F {
        match self.smoothness {
            MaternSmoothness::Half => -(-r).exp(),
            MaternSmoothness::ThreeHalves => {
                let x = F::from_f64_lossy(3f64.sqrt()) * r;
                -F::from_f64_lossy(3.0) * r * (-x).exp()
            }
            MaternSmoothness::FiveHalves => {
                let x = F::from_f64_lossy(5f64.sqrt()) * r;
                -F::from_f64_lossy(5.0 / 3.0) * r * (F::one() + x) * (-x).exp()
            }
        }
    }

    fn save(&self, store: &mut dyn ParameterStore) {
        store.save("nu", ParameterValue::Scalar(self.smoothness.nu()));
    }

    fn load(store: &dyn ParameterStore) -> Result<Self> {
        Ok(Self {
            smoothness: MaternSmoothness::from_nu(store.load_scalar("nu")?)?,
        })
    }

    fn fmt_shape(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ", nu={}", self.smoothness.nu())
    }
}

pub type MaternModel<F = f64> = StationaryKernel<MaternProfile, F>;

impl<F: KernelFloat> StationaryKernel<MaternProfile, F> {
    /// Matérn kernel with the given smoothness
    pub fn with_smoothness(
        scale: Vec<F>,
        amplitude: Vec<F>,
        smoothness: MaternSmoothness,
    ) -> Result<Self> {
        Self::with_profile(MaternProfile { smoothness }, scale, amplitude)
    }

    pub fn smoothness(&self) -> MaternSmoothness {
        self.profile().smoothness
    }
}
