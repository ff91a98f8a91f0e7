//! Row-major point container
//!
//! Points are stored contiguously so that matrix assembly can hand two rows to
//! [`CovarianceKernel::compute_as_scalar_between`](crate::CovarianceKernel::compute_as_scalar_between)
//! without any per-entry allocation.

use crate::numeric::KernelFloat;
use crate::{Error, Result};
use std::slice::ChunksExact;

/// A set of points of equal dimension
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<F: KernelFloat = f64> {
    data: Vec<F>,
    dimension: usize,
}

impl<F: KernelFloat> Sample<F> {
    /// Wrap a row-major buffer of `data.len() / dimension` points
    pub fn new(data: Vec<F>, dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidParameter(
                "sample dimension must be at least 1".to_string(),
            ));
        }
        if data.len() % dimension != 0 {
            return Err(Error::InvalidParameter(format!(
                "buffer of length {} does not hold whole points of dimension {dimension}",
                data.len()
            )));
        }
        Ok(Self { data, dimension })
    }

    /// Build from individual points, which must all have the same length
    pub fn from_rows<R: AsRef<[F]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * dimension);
        for row in rows {
            let row = row.as_ref();
            Error::check_dimension("row", dimension, row.len())?;
            data.extend_from_slice(row);
        }
        Self::new(data, dimension)
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Coordinates of point `i`
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[F] {
        let start = i * self.dimension;
        &self.data[start..start + self.dimension]
    }

    pub fn rows(&self) -> ChunksExact<'_, F> {
        self.data.chunks_exact(self.dimension)
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }
}
