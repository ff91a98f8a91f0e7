//! Floating-point bound shared by every kernel
//!
//! Kernels are generic over the scalar type so that the zero-lag threshold
//! follows the precision actually in use. `f64` is the default everywhere.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Scalar type a covariance kernel can be evaluated in
pub trait KernelFloat:
    Float + FromPrimitive + Debug + Display + Default + Send + Sync + 'static
{
    /// Convert from `f64`, yielding NaN if the value is not representable
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        <Self as FromPrimitive>::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Convert to `f64`, yielding NaN if the value is not representable
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Whether the value is strictly positive and finite
    #[inline]
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

impl<T> KernelFloat for T where
    T: Float + FromPrimitive + Debug + Display + Default + Send + Sync + 'static
{
}

/// Convert a slice of kernel scalars to `f64` for persistence
pub fn to_f64_vec<F: KernelFloat>(values: &[F]) -> Vec<f64> {
    values.iter().map(|&v| v.to_f64_lossy()).collect()
}

/// Convert a slice of `f64` back to kernel scalars
pub fn from_f64_vec<F: KernelFloat>(values: &[f64]) -> Vec<F> {
    values.iter().map(|&v| F::from_f64_lossy(v)).collect()
}
