//! Generic stationary kernel engine
//!
//! Every kernel in this crate has the form
//!
//! ```text
//! C(tau) = amplitude² · (1 + nugget)   if r <= epsilon
//! C(tau) = amplitude² · ρ(r)           otherwise
//! ```
//!
//! where `r` is a scale-weighted norm of the lag `tau = s - t`. A kernel shape
//! only supplies ρ, its derivative and the norm through [`CorrelationProfile`];
//! [`StationaryKernel`] handles validation, both evaluation entry points, the
//! gradient, mutation, persistence and formatting once for the whole family.
//!
//! # Gradient conventions
//!
//! The gradient is taken with respect to the first point `s`, which is the
//! same as the derivative with respect to the lag.
//!
//! - Weighted L1 norm: `g_i = amplitude² · ρ'(r) · σ_i / scale_i` where
//!   `σ_i = +1` if `tau_i > 0` and `-1` otherwise. At exactly zero lag the
//!   covariance has a corner; the gradient is the one-sided value
//!   `amplitude² · ρ'(0) / scale_i` for every coordinate.
//! - Weighted L2 norm: `g_i = amplitude² · ρ'(r) · tau_i / (scale_i² · r)`,
//!   and the zero column at exactly zero lag.
//!
//! Neither zero-lag value is a true derivative; callers that need gradient
//! continuity near zero lag must not rely on them.

use covariance_core::config::KernelConfig;
use covariance_core::{
    CovarianceKernel, Error, KernelFloat, KernelParameters, ParameterStore, ParameterValue,
    Result, CLASS_KEY,
};
use nalgebra::DMatrix;
use std::fmt;
use tracing::debug;

/// Norm applied to the scaled lag `tau_i / scale_i`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LagNorm {
    /// `Σ |tau_i / scale_i|`
    L1,
    /// `sqrt(Σ (tau_i / scale_i)²)`
    L2,
}

/// Correlation shape of one kernel variant
///
/// `correlation(0)` must be 1. Shape parameters beyond scale and amplitude
/// (smoothness, power, radius) live in the implementing type and are
/// persisted through [`save`](Self::save) / [`load`](Self::load).
pub trait CorrelationProfile<F: KernelFloat>:
    fmt::Debug + Clone + PartialEq + Default + Send + Sync + 'static
{
    /// Class name reported by the kernel
    const NAME: &'static str;

    /// Norm of the scaled lag fed to the profile
    const NORM: LagNorm;

    /// ρ(r) for `r > 0`
    fn correlation(&self, r: F) -> F;

    /// dρ/dr for `r > 0`, and its right limit at `r = 0`
    fn correlation_derivative(&self, r: F) -> F;

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn save(&self, _store: &mut dyn ParameterStore) {}

    fn load(_store: &dyn ParameterStore) -> Result<Self> {
        Ok(Self::default())
    }

    /// Extra `, name=value` pairs appended to the kernel's `Display` output
    fn fmt_shape(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// A stationary covariance kernel with a single output
///
/// Type aliases such as [`AbsoluteExponential`](crate::AbsoluteExponential)
/// name the concrete variants.
#[derive(Debug, Clone, PartialEq)]
pub struct StationaryKernel<P, F: KernelFloat = f64> {
    parameters: KernelParameters<F>,
    profile: P,
    epsilon: F,
}

impl<P: CorrelationProfile<F>, F: KernelFloat> StationaryKernel<P, F> {
    /// Kernel over `input_dimension` inputs with the configured default scale
    /// and unit amplitude
    pub fn new(input_dimension: usize) -> Result<Self> {
        Self::from_parameters(
            P::default(),
            KernelParameters::with_default_scale(input_dimension)?,
        )
    }

    /// Kernel with explicit length-scales and unit amplitude
    pub fn with_scale(scale: Vec<F>) -> Result<Self> {
        Self::from_parameters(P::default(), KernelParameters::with_scale(scale)?)
    }

    /// Kernel with explicit length-scales and amplitude
    ///
    /// Fails with [`Error::InvalidOutputDimension`] unless `amplitude` has
    /// exactly one entry.
    pub fn with_scale_and_amplitude(scale: Vec<F>, amplitude: Vec<F>) -> Result<Self> {
        Self::with_profile(P::default(), scale, amplitude)
    }

    /// Kernel with an explicit shape
    pub fn with_profile(profile: P, scale: Vec<F>, amplitude: Vec<F>) -> Result<Self> {
        Self::from_parameters(profile, KernelParameters::new(scale, amplitude, F::zero())?)
    }

    /// Assemble a kernel from validated parts
    pub fn from_parameters(profile: P, parameters: KernelParameters<F>) -> Result<Self> {
        check_output_dimension::<P, F>(parameters.output_dimension())?;
        profile.validate()?;
        let epsilon = KernelConfig::global().epsilon_for::<F>();
        debug!(
            kernel = P::NAME,
            input_dimension = parameters.input_dimension(),
            "Constructed covariance kernel"
        );
        Ok(Self {
            parameters,
            profile,
            epsilon,
        })
    }

    /// Set the nugget factor
    pub fn with_nugget_factor(mut self, nugget_factor: F) -> Result<Self> {
        self.parameters.set_nugget_factor(nugget_factor)?;
        Ok(self)
    }

    /// Override the zero-lag threshold for this instance
    pub fn with_epsilon(mut self, epsilon: F) -> Result<Self> {
        if !(epsilon.is_finite() && epsilon >= F::zero()) {
            return Err(Error::InvalidParameter(format!(
                "epsilon must be non-negative and finite, got {epsilon}"
            )));
        }
        self.epsilon = epsilon;
        Ok(self)
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn set_scale(&mut self, scale: Vec<F>) -> Result<()> {
        self.parameters.set_scale(scale)
    }

    pub fn set_amplitude(&mut self, amplitude: Vec<F>) -> Result<()> {
        check_output_dimension::<P, F>(amplitude.len())?;
        self.parameters.set_amplitude(amplitude)
    }

    pub fn set_nugget_factor(&mut self, nugget_factor: F) -> Result<()> {
        self.parameters.set_nugget_factor(nugget_factor)
    }

    /// See [`KernelParameters::set_input_dimension`]
    pub fn set_input_dimension(&mut self, input_dimension: usize) -> Result<()> {
        self.parameters.set_input_dimension(input_dimension)
    }

    /// See [`KernelParameters::set_full_parameter`]
    pub fn set_full_parameter(&mut self, parameter: &[F]) -> Result<()> {
        self.parameters.set_full_parameter(parameter)
    }

    /// Rebuild a kernel written by [`CovarianceKernel::save`]
    ///
    /// A missing `epsilon` key falls back to the configured threshold.
    pub fn load(store: &dyn ParameterStore) -> Result<Self> {
        let parameters = KernelParameters::load(store)?;
        let profile = P::load(store)?;
        let kernel = Self::from_parameters(profile, parameters)?;
        match store.load_scalar("epsilon") {
            Ok(epsilon) => kernel.with_epsilon(F::from_f64_lossy(epsilon)),
            Err(Error::MissingKey(_)) => Ok(kernel),
            Err(e) => Err(e),
        }
    }

    /// Weighted norm of a lag given coordinate by coordinate
    #[inline]
    fn weighted_norm<I: Iterator<Item = F>>(&self, lag: I) -> F {
        let scaled = lag.zip(self.parameters.scale()).map(|(tau, &theta)| tau / theta);
        match P::NORM {
            LagNorm::L1 => scaled.fold(F::zero(), |acc, x| acc + x.abs()),
            LagNorm::L2 => scaled.fold(F::zero(), |acc, x| acc + x * x).sqrt(),
        }
    }

    #[inline]
    fn covariance_at(&self, r: F) -> F {
        let variance = self.parameters.variance();
        if r <= self.epsilon {
            variance * (F::one() + self.parameters.nugget_factor())
        } else {
            variance * self.profile.correlation(r)
        }
    }
}

fn check_output_dimension<P: CorrelationProfile<F>, F: KernelFloat>(actual: usize) -> Result<()> {
    if actual != 1 {
        return Err(Error::InvalidOutputDimension {
            kernel: P::NAME,
            actual,
        });
    }
    Ok(())
}

impl<P: CorrelationProfile<F>, F: KernelFloat> CovarianceKernel<F> for StationaryKernel<P, F> {
    fn class_name(&self) -> &'static str {
        P::NAME
    }

    fn parameters(&self) -> &KernelParameters<F> {
        &self.parameters
    }

    fn epsilon(&self) -> F {
        self.epsilon
    }

    fn compute_as_scalar(&self, tau: &[F]) -> Result<F> {
        Error::check_dimension("tau", self.parameters.input_dimension(), tau.len())?;
        Ok(self.covariance_at(self.weighted_norm(tau.iter().copied())))
    }

    #[inline]
    fn compute_as_scalar_between(&self, s: &[F], t: &[F]) -> F {
        debug_assert!(s.len() >= self.parameters.input_dimension());
        debug_assert!(t.len() >= self.parameters.input_dimension());
        let lag = s.iter().zip(t).map(|(&a, &b)| a - b);
        self.covariance_at(self.weighted_norm(lag))
    }

    fn partial_gradient(&self, s: &[F], t: &[F]) -> Result<DMatrix<F>> {
        let d = self.parameters.input_dimension();
        Error::check_dimension("s", d, s.len())?;
        Error::check_dimension("t", d, t.len())?;

        let scale = self.parameters.scale();
        let variance = self.parameters.variance();
        let r = self.weighted_norm(s.iter().zip(t).map(|(&a, &b)| a - b));
        let zero = F::zero();

        let gradient = match P::NORM {
            LagNorm::L1 if r == zero => {
                let slope = variance * self.profile.correlation_derivative(zero);
                DMatrix::from_fn(d, 1, |i, _| slope / scale[i])
            }
            LagNorm::L1 => {
                let slope = variance * self.profile.correlation_derivative(r);
                DMatrix::from_fn(d, 1, |i, _| {
                    if s[i] - t[i] > zero {
                        slope / scale[i]
                    } else {
                        -slope / scale[i]
                    }
                })
            }
            LagNorm::L2 if r == zero => DMatrix::from_element(d, 1, zero),
            LagNorm::L2 => {
                let slope = variance * self.profile.correlation_derivative(r) / r;
                DMatrix::from_fn(d, 1, |i, _| {
                    slope * (s[i] - t[i]) / (scale[i] * scale[i])
                })
            }
        };
        Ok(gradient)
    }

    fn clone_box(&self) -> Box<dyn CovarianceKernel<F>> {
        Box::new(self.clone())
    }

    fn save(&self, store: &mut dyn ParameterStore) {
        store.save(CLASS_KEY, ParameterValue::Text(P::NAME.to_string()));
        self.parameters.save(store);
        self.profile.save(store);
        store.save("epsilon", ParameterValue::Scalar(self.epsilon.to_f64_lossy()));
    }
}

impl<P: CorrelationProfile<F>, F: KernelFloat> fmt::Display for StationaryKernel<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(scale=", P::NAME)?;
        write_values(f, self.parameters.scale())?;
        write!(f, ", amplitude=")?;
        write_values(f, self.parameters.amplitude())?;
        write!(f, ", nugget={}", self.parameters.nugget_factor())?;
        self.profile.fmt_shape(f)?;
        write!(f, ")")
    }
}

fn write_values<F: KernelFloat>(f: &mut fmt::Formatter<'_>, values: &[F]) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{v}")?;
    }
    write!(f, "]")
}
