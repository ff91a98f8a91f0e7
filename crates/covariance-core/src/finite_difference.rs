//! Centred finite-difference gradient
//!
//! Calibration code can swap this in for the analytic gradient, and tests use
//! it to cross-check [`CovarianceKernel::partial_gradient`] away from zero lag.

use crate::numeric::KernelFloat;
use crate::traits::CovarianceKernel;
use crate::{Error, Result};
use nalgebra::DMatrix;

/// Centred difference of the covariance with respect to `s`
///
/// Coordinate `i` of the result is
/// `(C(tau + h e_i) - C(tau - h e_i)) / 2h` with `tau = s - t`.
pub fn centered_partial_gradient<F, K>(kernel: &K, s: &[F], t: &[F], step: F) -> Result<DMatrix<F>>
where
    F: KernelFloat,
    K: CovarianceKernel<F> + ?Sized,
{
    let d = kernel.input_dimension();
    Error::check_dimension("s", d, s.len())?;
    Error::check_dimension("t", d, t.len())?;
    if !step.is_positive_finite() {
        return Err(Error::InvalidParameter(format!(
            "finite-difference step must be positive and finite, got {step}"
        )));
    }

    let mut tau: Vec<F> = s.iter().zip(t).map(|(&a, &b)| a - b).collect();
    let two_h = step + step;
    let mut gradient = Vec::with_capacity(d);
    for i in 0..d {
        let centre = tau[i];
        tau[i] = centre + step;
        let forward = kernel.compute_as_scalar(&tau)?;
        tau[i] = centre - step;
        let backward = kernel.compute_as_scalar(&tau)?;
        tau[i] = centre;
        gradient.push((forward - backward) / two_h);
    }
    Ok(DMatrix::from_vec(d, 1, gradient))
}
