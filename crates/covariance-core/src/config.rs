//! Process-wide configuration for kernel construction
//!
//! Two values are configurable: the length-scale used when a kernel is built
//! from an input dimension alone, and an override for the threshold under
//! which a weighted lag norm counts as "same point". Without an override each
//! kernel uses the machine epsilon of its own float type. Kernels copy the
//! threshold at construction, so changing the global value never affects
//! existing instances.

use crate::numeric::KernelFloat;
use crate::{Error, Result};
use lazy_static::lazy_static;
use std::sync::RwLock;
use tracing::debug;

/// Default length-scale for every input dimension
pub const DEFAULT_THETA: f64 = 1.0;

/// Default amplitude for the single output dimension
pub const DEFAULT_AMPLITUDE: f64 = 1.0;

lazy_static! {
    static ref GLOBAL_CONFIG: RwLock<KernelConfig> = RwLock::new(KernelConfig::default());
}

/// Configuration snapshot consulted by kernel constructors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Length-scale assigned to every dimension when no explicit scale is given
    pub default_theta: f64,
    /// Zero-lag threshold for new kernels; `None` means `F::epsilon()` of the
    /// kernel's float type
    pub scalar_epsilon: Option<f64>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            default_theta: DEFAULT_THETA,
            scalar_epsilon: None,
        }
    }
}

impl KernelConfig {
    /// Set the default length-scale
    pub fn with_default_theta(mut self, default_theta: f64) -> Self {
        self.default_theta = default_theta;
        self
    }

    /// Override the zero-lag threshold for every float type
    pub fn with_scalar_epsilon(mut self, scalar_epsilon: f64) -> Self {
        self.scalar_epsilon = Some(scalar_epsilon);
        self
    }

    /// Drop the override and fall back to each float type's machine epsilon
    pub fn with_machine_epsilon(mut self) -> Self {
        self.scalar_epsilon = None;
        self
    }

    /// Threshold a kernel over `F` snapshots at construction
    pub fn epsilon_for<F: KernelFloat>(&self) -> F {
        self.scalar_epsilon
            .map(F::from_f64_lossy)
            .unwrap_or_else(F::epsilon)
    }

    /// Check that the configuration can produce valid kernels
    pub fn validate(&self) -> Result<()> {
        if !(self.default_theta.is_finite() && self.default_theta > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "default_theta must be positive and finite, got {}",
                self.default_theta
            )));
        }
        if let Some(epsilon) = self.scalar_epsilon {
            if !(epsilon.is_finite() && epsilon >= 0.0) {
                return Err(Error::InvalidParameter(format!(
                    "scalar_epsilon must be non-negative and finite, got {epsilon}"
                )));
            }
        }
        Ok(())
    }

    /// Current process-wide configuration
    pub fn global() -> Self {
        *GLOBAL_CONFIG
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the process-wide configuration
    ///
    /// Only kernels constructed afterwards observe the new values.
    pub fn set_global(config: KernelConfig) -> Result<()> {
        config.validate()?;
        let mut guard = GLOBAL_CONFIG
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        debug!(
            default_theta = config.default_theta,
            scalar_epsilon = ?config.scalar_epsilon,
            "Updating global kernel configuration"
        );
        *guard = config;
        Ok(())
    }
}
