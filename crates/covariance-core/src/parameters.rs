//! Parameter model shared by every stationary kernel
//!
//! A kernel is fully described by one positive length-scale per input
//! dimension, one positive amplitude per output dimension and a non-negative
//! nugget factor. All validation lives here so that concrete kernels only
//! carry the formula that distinguishes them.

use crate::config::{KernelConfig, DEFAULT_AMPLITUDE};
use crate::numeric::{from_f64_vec, to_f64_vec, KernelFloat};
use crate::persistence::{ParameterStore, ParameterValue};
use crate::{Error, Result};

/// Scale, amplitude and nugget of a covariance kernel
///
/// The fields are private; every mutator revalidates, so a value of this type
/// always satisfies `scale[i] > 0`, `amplitude[j] > 0` and `nugget_factor >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelParameters<F: KernelFloat = f64> {
    scale: Vec<F>,
    amplitude: Vec<F>,
    nugget_factor: F,
}

impl<F: KernelFloat> KernelParameters<F> {
    /// Create validated parameters
    pub fn new(scale: Vec<F>, amplitude: Vec<F>, nugget_factor: F) -> Result<Self> {
        validate_scale(&scale)?;
        validate_amplitude(&amplitude)?;
        validate_nugget(nugget_factor)?;
        Ok(Self {
            scale,
            amplitude,
            nugget_factor,
        })
    }

    /// Default parameters for `input_dimension` inputs
    ///
    /// Every length-scale is the configured `default_theta`, the single
    /// amplitude is 1 and there is no nugget.
    pub fn with_default_scale(input_dimension: usize) -> Result<Self> {
        let theta = F::from_f64_lossy(KernelConfig::global().default_theta);
        Self::new(
            vec![theta; input_dimension],
            vec![F::from_f64_lossy(DEFAULT_AMPLITUDE)],
            F::zero(),
        )
    }

    /// Explicit scale with unit amplitude and no nugget
    pub fn with_scale(scale: Vec<F>) -> Result<Self> {
        Self::new(scale, vec![F::from_f64_lossy(DEFAULT_AMPLITUDE)], F::zero())
    }

    pub fn scale(&self) -> &[F] {
        &self.scale
    }

    pub fn amplitude(&self) -> &[F] {
        &self.amplitude
    }

    pub fn nugget_factor(&self) -> F {
        self.nugget_factor
    }

    pub fn input_dimension(&self) -> usize {
        self.scale.len()
    }

    pub fn output_dimension(&self) -> usize {
        self.amplitude.len()
    }

    /// Covariances depend on the lag only
    pub fn is_stationary(&self) -> bool {
        true
    }

    /// Variance of the first output, `amplitude[0]^2`
    #[inline]
    pub fn variance(&self) -> F {
        let a = self.amplitude[0];
        a * a
    }

    pub fn set_scale(&mut self, scale: Vec<F>) -> Result<()> {
        validate_scale(&scale)?;
        self.scale = scale;
        Ok(())
    }

    pub fn set_amplitude(&mut self, amplitude: Vec<F>) -> Result<()> {
        validate_amplitude(&amplitude)?;
        self.amplitude = amplitude;
        Ok(())
    }

    pub fn set_nugget_factor(&mut self, nugget_factor: F) -> Result<()> {
        validate_nugget(nugget_factor)?;
        self.nugget_factor = nugget_factor;
        Ok(())
    }

    /// Change the input dimension
    ///
    /// Shrinking drops trailing length-scales; growing appends the configured
    /// `default_theta`.
    pub fn set_input_dimension(&mut self, input_dimension: usize) -> Result<()> {
        if input_dimension == 0 {
            return Err(Error::InvalidParameter(
                "input dimension must be at least 1".to_string(),
            ));
        }
        let theta = F::from_f64_lossy(KernelConfig::global().default_theta);
        self.scale.resize(input_dimension, theta);
        Ok(())
    }

    /// Calibration vector: the scale followed by the amplitude
    pub fn full_parameter(&self) -> Vec<F> {
        self.scale
            .iter()
            .chain(self.amplitude.iter())
            .copied()
            .collect()
    }

    /// Replace scale and amplitude from a calibration vector
    ///
    /// The vector must have `input_dimension + output_dimension` entries. On
    /// error the parameters are left untouched.
    pub fn set_full_parameter(&mut self, parameter: &[F]) -> Result<()> {
        let d = self.input_dimension();
        Error::check_dimension("parameter", d + self.output_dimension(), parameter.len())?;
        let (scale, amplitude) = parameter.split_at(d);
        validate_scale(scale)?;
        validate_amplitude(amplitude)?;
        self.scale.copy_from_slice(scale);
        self.amplitude.copy_from_slice(amplitude);
        Ok(())
    }

    /// Names of the entries of [`full_parameter`](Self::full_parameter)
    pub fn parameter_description(&self) -> Vec<String> {
        (0..self.input_dimension())
            .map(|i| format!("scale_{i}"))
            .chain((0..self.output_dimension()).map(|j| format!("amplitude_{j}")))
            .collect()
    }

    /// Write every parameter to `store`
    pub fn save(&self, store: &mut dyn ParameterStore) {
        store.save("input_dimension", ParameterValue::Count(self.input_dimension()));
        store.save("scale", ParameterValue::Vector(to_f64_vec(&self.scale)));
        store.save("amplitude", ParameterValue::Vector(to_f64_vec(&self.amplitude)));
        store.save(
            "nugget_factor",
            ParameterValue::Scalar(self.nugget_factor.to_f64_lossy()),
        );
    }

    /// Read and validate parameters from `store`
    pub fn load(store: &dyn ParameterStore) -> Result<Self> {
        let input_dimension = store.load_count("input_dimension")?;
        let scale = store.load_vector("scale")?;
        Error::check_dimension("scale", input_dimension, scale.len())?;
        let amplitude = store.load_vector("amplitude")?;
        let nugget_factor = store.load_scalar("nugget_factor")?;
        Self::new(
            from_f64_vec(&scale),
            from_f64_vec(&amplitude),
            F::from_f64_lossy(nugget_factor),
        )
    }
}

fn validate_scale<F: KernelFloat>(scale: &[F]) -> Result<()> {
    if scale.is_empty() {
        return Err(Error::InvalidParameter(
            "input dimension must be at least 1".to_string(),
        ));
    }
    validate_positive("scale", scale)
}

fn validate_amplitude<F: KernelFloat>(amplitude: &[F]) -> Result<()> {
    if amplitude.is_empty() {
        return Err(Error::InvalidParameter(
            "output dimension must be at least 1".to_string(),
        ));
    }
    validate_positive("amplitude", amplitude)
}

fn validate_positive<F: KernelFloat>(name: &str, values: &[F]) -> Result<()> {
    match values.iter().position(|v| !v.is_positive_finite()) {
        Some(i) => Err(Error::non_positive(name, i, values[i].to_f64_lossy())),
        None => Ok(()),
    }
}

fn validate_nugget<F: KernelFloat>(nugget_factor: F) -> Result<()> {
    if !(nugget_factor.is_finite() && nugget_factor >= F::zero()) {
        return Err(Error::InvalidParameter(format!(
            "nugget factor must be non-negative and finite, got {nugget_factor}"
        )));
    }
    Ok(())
}
