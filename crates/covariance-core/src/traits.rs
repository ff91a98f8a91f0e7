//! The covariance kernel contract
//!
//! Every kernel shape implements [`CovarianceKernel`]. Implementations are
//! immutable through this trait: all methods take `&self`, so one instance
//! can be shared across threads while a covariance matrix is assembled.

use crate::numeric::KernelFloat;
use crate::parameters::KernelParameters;
use crate::persistence::ParameterStore;
use crate::Result;
use nalgebra::DMatrix;
use std::fmt;

/// Stationary covariance kernel with an analytic gradient
///
/// # Example
///
/// Code written against the trait works for every kernel shape, including
/// trait objects:
///
/// ```rust
/// use covariance_core::{CovarianceKernel, Result};
///
/// /// Covariance at zero lag, nugget included
/// fn total_variance<K: CovarianceKernel + ?Sized>(kernel: &K) -> Result<f64> {
///     kernel.compute_as_scalar(&vec![0.0; kernel.input_dimension()])
/// }
///
/// fn largest_variance(kernels: &[Box<dyn CovarianceKernel>]) -> Result<f64> {
///     let mut largest = 0.0;
///     for kernel in kernels {
///         largest = f64::max(largest, total_variance(kernel.as_ref())?);
///     }
///     Ok(largest)
/// }
///
/// assert_eq!(largest_variance(&[]).unwrap(), 0.0);
/// ```
pub trait CovarianceKernel<F: KernelFloat = f64>: fmt::Debug + fmt::Display + Send + Sync {
    /// Stable type identifier used by registries to rebuild the kernel
    fn class_name(&self) -> &'static str;

    /// Scale, amplitude and nugget of this kernel
    fn parameters(&self) -> &KernelParameters<F>;

    /// Weighted lag norms at or below this value take the nugget branch
    fn epsilon(&self) -> F;

    /// Covariance for the lag `tau`
    ///
    /// Fails with a dimension mismatch if `tau.len() != input_dimension()`.
    fn compute_as_scalar(&self, tau: &[F]) -> Result<F>;

    /// Covariance between two points, computing the lag on the fly
    ///
    /// Lengths are not checked: the first `input_dimension()` coordinates of
    /// each point are read in lockstep. Callers assembling matrices validate
    /// the sample dimension once instead of per entry.
    fn compute_as_scalar_between(&self, s: &[F], t: &[F]) -> F;

    /// Gradient of the covariance with respect to `s`, as a `d × 1` column
    ///
    /// Fails with a dimension mismatch naming `s` or `t` if either length
    /// differs from `input_dimension()`.
    fn partial_gradient(&self, s: &[F], t: &[F]) -> Result<DMatrix<F>>;

    /// Independent copy behind a trait object
    fn clone_box(&self) -> Box<dyn CovarianceKernel<F>>;

    /// Write the class name and every parameter to `store`
    fn save(&self, store: &mut dyn ParameterStore);

    fn input_dimension(&self) -> usize {
        self.parameters().input_dimension()
    }

    fn output_dimension(&self) -> usize {
        self.parameters().output_dimension()
    }

    fn scale(&self) -> &[F] {
        self.parameters().scale()
    }

    fn amplitude(&self) -> &[F] {
        self.parameters().amplitude()
    }

    fn nugget_factor(&self) -> F {
        self.parameters().nugget_factor()
    }

    fn is_stationary(&self) -> bool {
        self.parameters().is_stationary()
    }

    /// Calibration vector, see [`KernelParameters::full_parameter`]
    fn full_parameter(&self) -> Vec<F> {
        self.parameters().full_parameter()
    }
}

impl<F: KernelFloat> Clone for Box<dyn CovarianceKernel<F>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
