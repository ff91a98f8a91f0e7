//! Core traits and types for stationary covariance kernels
//!
//! This crate provides everything a kernel shape needs except its formula:
//! the validated parameter model, the [`CovarianceKernel`] contract, global
//! configuration, persistence and registry boundaries, and the consumers that
//! drive a kernel at volume (matrix assembly and finite-difference gradients).
//!
//! # Architecture Overview
//!
//! 1. **Parameters** - [`KernelParameters`] holds scale, amplitude and nugget
//! 2. **Contract** - [`CovarianceKernel`] evaluates covariance and gradient
//! 3. **Consumers** - [`discretize()`] and [`centered_partial_gradient`]
//! 4. **Boundaries** - [`ParameterStore`] and [`KernelRegistry`]
//!
//! Concrete kernels live in the `covariance-models` crate.

pub mod config;
pub mod discretize;
pub mod error;
pub mod finite_difference;
pub mod numeric;
pub mod parameters;
pub mod persistence;
pub mod registry;
pub mod sample;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use config::{KernelConfig, DEFAULT_AMPLITUDE, DEFAULT_THETA};
pub use discretize::{discretize, discretize_cross};
#[cfg(feature = "parallel")]
pub use discretize::discretize_parallel;
pub use finite_difference::centered_partial_gradient;
pub use numeric::KernelFloat;
pub use parameters::KernelParameters;
pub use persistence::{MemoryStore, ParameterStore, ParameterValue, CLASS_KEY};
pub use registry::{BoxedKernel, KernelConstructor, KernelRegistry};
pub use sample::Sample;
pub use traits::CovarianceKernel;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CovarianceKernel, KernelConfig, KernelFloat, KernelParameters, MemoryStore,
        ParameterStore, Result, Sample,
    };

    pub use crate::error::Error;
}
