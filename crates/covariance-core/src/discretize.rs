//! Covariance matrix assembly over a set of points
//!
//! Assembly is the high-volume caller of a kernel: one two-point evaluation
//! per matrix entry. The sample dimension is checked once up front so the
//! inner loop can use the unchecked entry point.

use crate::numeric::KernelFloat;
use crate::sample::Sample;
use crate::traits::CovarianceKernel;
use crate::{Error, Result};
use nalgebra::DMatrix;
use tracing::{debug, instrument};

/// Symmetric `n × n` covariance matrix of `sample`
///
/// Only the lower triangle is evaluated; the diagonal carries the
/// nugget-inflated variance.
#[instrument(skip_all, fields(kernel = kernel.class_name(), points = sample.len()))]
pub fn discretize<F, K>(kernel: &K, sample: &Sample<F>) -> Result<DMatrix<F>>
where
    F: KernelFloat,
    K: CovarianceKernel<F> + ?Sized,
{
    Error::check_dimension("sample", kernel.input_dimension(), sample.dimension())?;
    let n = sample.len();
    let mut matrix = DMatrix::from_element(n, n, F::zero());
    for i in 0..n {
        let s = sample.row(i);
        for j in 0..=i {
            let value = kernel.compute_as_scalar_between(s, sample.row(j));
            matrix[(i, j)] = value;
            matrix[(j, i)] = value;
        }
    }
    debug!("Assembled {n}x{n} covariance matrix");
    Ok(matrix)
}

/// `n_a × n_b` cross-covariance between two samples
#[instrument(skip_all, fields(kernel = kernel.class_name(), rows = left.len(), cols = right.len()))]
pub fn discretize_cross<F, K>(kernel: &K, left: &Sample<F>, right: &Sample<F>) -> Result<DMatrix<F>>
where
    F: KernelFloat,
    K: CovarianceKernel<F> + ?Sized,
{
    Error::check_dimension("left", kernel.input_dimension(), left.dimension())?;
    Error::check_dimension("right", kernel.input_dimension(), right.dimension())?;
    let matrix = DMatrix::from_fn(left.len(), right.len(), |i, j| {
        kernel.compute_as_scalar_between(left.row(i), right.row(j))
    });
    debug!(
        "Assembled {}x{} cross-covariance matrix",
        left.len(),
        right.len()
    );
    Ok(matrix)
}

/// Same result as [`discretize`], with rows computed on the rayon pool
///
/// All workers share the one kernel instance.
#[cfg(feature = "parallel")]
#[instrument(skip_all, fields(kernel = kernel.class_name(), points = sample.len()))]
pub fn discretize_parallel<F, K>(kernel: &K, sample: &Sample<F>) -> Result<DMatrix<F>>
where
    F: KernelFloat,
    K: CovarianceKernel<F> + ?Sized,
{
    use rayon::prelude::*;

    Error::check_dimension("sample", kernel.input_dimension(), sample.dimension())?;
    let n = sample.len();
    let rows: Vec<Vec<F>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let s = sample.row(i);
            (0..n)
                .map(|j| kernel.compute_as_scalar_between(s, sample.row(j)))
                .collect()
        })
        .collect();
    debug!("Assembled {n}x{n} covariance matrix on {} threads", rayon::current_num_threads());
    Ok(DMatrix::from_fn(n, n, |i, j| rows[i][j]))
}
