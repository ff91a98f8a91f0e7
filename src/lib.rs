//! Stationary covariance kernels for kriging and Gaussian-process models
//!
//! This crate re-exports the workspace:
//! - [`covariance_core`]: the kernel contract, parameters, persistence,
//!   registry and matrix assembly
//! - [`covariance_models`]: the concrete kernels, led by the absolute
//!   exponential
//!
//! # Examples
//!
//! ```rust
//! use covariance_kernels::prelude::*;
//!
//! let kernel = AbsoluteExponential::with_scale_and_amplitude(vec![1.0, 2.0], vec![1.5]).unwrap();
//! let sample = Sample::from_rows(&[[0.0, 0.0], [1.0, -1.0], [0.5, 2.0]]).unwrap();
//!
//! let matrix = discretize(&kernel, &sample).unwrap();
//! assert_eq!(matrix[(0, 0)], 2.25);
//! assert_eq!(matrix[(0, 1)], matrix[(1, 0)]);
//! ```

pub use covariance_core;
pub use covariance_models;

pub use covariance_core::{
    centered_partial_gradient, discretize, discretize_cross, CovarianceKernel, Error,
    KernelConfig, KernelFloat, KernelParameters, KernelRegistry, MemoryStore, ParameterStore,
    ParameterValue, Result, Sample,
};
#[cfg(feature = "parallel")]
pub use covariance_core::discretize_parallel;
pub use covariance_models::{
    default_registry, load_kernel, AbsoluteExponential, CorrelationProfile, GeneralizedExponential,
    LagNorm, MaternModel, MaternSmoothness, SphericalModel, SquaredExponential, StationaryKernel,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use covariance_core::prelude::*;
    pub use covariance_core::{discretize, discretize_cross};
    pub use covariance_models::{
        load_kernel, AbsoluteExponential, GeneralizedExponential, MaternModel, SphericalModel,
        SquaredExponential,
    };
}
