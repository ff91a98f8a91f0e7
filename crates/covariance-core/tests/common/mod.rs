//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use covariance_core::{
    CovarianceKernel, Error, KernelParameters, ParameterStore, ParameterValue, Result, CLASS_KEY,
};
use nalgebra::DMatrix;
use std::fmt;

/// Minimal Gaussian kernel `a² exp(-|tau/theta|²)` for exercising the
/// generic machinery
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    pub parameters: KernelParameters<f64>,
}

impl GaussianKernel {
    pub const NAME: &'static str = "Gaussian";

    pub fn new(scale: Vec<f64>, amplitude: f64) -> Self {
        Self {
            parameters: KernelParameters::new(scale, vec![amplitude], 0.0).unwrap(),
        }
    }

    pub fn load(store: &dyn ParameterStore) -> Result<Box<dyn CovarianceKernel<f64>>> {
        Ok(Box::new(Self {
            parameters: KernelParameters::load(store)?,
        }))
    }

    fn squared_norm(&self, s: &[f64], t: &[f64]) -> f64 {
        s.iter()
            .zip(t)
            .zip(self.parameters.scale())
            .map(|((a, b), theta)| ((a - b) / theta).powi(2))
            .sum()
    }
}

impl CovarianceKernel<f64> for GaussianKernel {
    fn class_name(&self) -> &'static str {
        Self::NAME
    }

    fn parameters(&self) -> &KernelParameters<f64> {
        &self.parameters
    }

    fn epsilon(&self) -> f64 {
        0.0
    }

    fn compute_as_scalar(&self, tau: &[f64]) -> Result<f64> {
        Error::check_dimension("tau", self.input_dimension(), tau.len())?;
        let zero = vec![0.0; tau.len()];
        Ok(self.compute_as_scalar_between(tau, &zero))
    }

    fn compute_as_scalar_between(&self, s: &[f64], t: &[f64]) -> f64 {
        self.parameters.variance() * (-self.squared_norm(s, t)).exp()
    }

    fn partial_gradient(&self, s: &[f64], t: &[f64]) -> Result<DMatrix<f64>> {
        let d = self.input_dimension();
        Error::check_dimension("s", d, s.len())?;
        Error::check_dimension("t", d, t.len())?;
        let value = self.compute_as_scalar_between(s, t);
        let scale = self.parameters.scale();
        Ok(DMatrix::from_fn(d, 1, |i, _| {
            -2.0 * (s[i] - t[i]) / (scale[i] * scale[i]) * value
        }))
    }

    fn clone_box(&self) -> Box<dyn CovarianceKernel<f64>> {
        Box::new(self.clone())
    }

    fn save(&self, store: &mut dyn ParameterStore) {
        store.save(CLASS_KEY, ParameterValue::Text(Self::NAME.to_string()));
        self.parameters.save(store);
    }
}

impl fmt::Display for GaussianKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(scale={:?})", Self::NAME, self.parameters.scale())
    }
}
