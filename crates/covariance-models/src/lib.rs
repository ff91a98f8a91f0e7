//! Stationary covariance kernels
//!
//! This crate provides the concrete kernel family on top of
//! `covariance-core`:
//! - Absolute exponential (weighted L1 exponential)
//! - Squared exponential
//! - Matérn with ν ∈ {1/2, 3/2, 5/2}
//! - Generalized exponential
//! - Spherical
//!
//! # Overview
//!
//! All variants share one engine, [`StationaryKernel`], which owns the
//! parameters, the nugget rule at zero lag and the gradient. A variant is a
//! [`CorrelationProfile`]: a correlation function of the weighted lag norm and
//! its derivative.
//!
//! | Kernel | Norm | ρ(r) |
//! |--------|------|------|
//! | AbsoluteExponential | L1 | `exp(-r)` |
//! | SquaredExponential | L2 | `exp(-r²/2)` |
//! | MaternModel | L2 | half-integer Matérn |
//! | GeneralizedExponential | L2 | `exp(-r^p)` |
//! | SphericalModel | L2 | `1 - 1.5x + 0.5x³`, `x = r/R < 1` |
//!
//! # Examples
//!
//! ```rust
//! use covariance_core::CovarianceKernel;
//! use covariance_models::AbsoluteExponential;
//!
//! let kernel = AbsoluteExponential::with_scale_and_amplitude(vec![1.0], vec![2.0]).unwrap();
//! assert_eq!(kernel.compute_as_scalar(&[0.0]).unwrap(), 4.0);
//!
//! let gradient = kernel.partial_gradient(&[2.0], &[0.0]).unwrap();
//! assert!((gradient[(0, 0)] + 4.0 * (-2.0f64).exp()).abs() < 1e-12);
//! ```

pub mod absolute_exponential;
pub mod generalized_exponential;
pub mod matern;
pub mod registry;
pub mod spherical;
pub mod squared_exponential;
pub mod stationary;

// Re-exports
pub use absolute_exponential::{AbsoluteExponential, AbsoluteExponentialProfile};
pub use generalized_exponential::{GeneralizedExponential, GeneralizedExponentialProfile};
pub use matern::{MaternModel, MaternProfile, MaternSmoothness};
pub use registry::{default_registry, load_kernel, register_builtin_kernels};
pub use spherical::{SphericalModel, SphericalProfile};
pub use squared_exponential::{SquaredExponential, SquaredExponentialProfile};
pub use stationary::{CorrelationProfile, LagNorm, StationaryKernel};
