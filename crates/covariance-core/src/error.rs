//! Error types for covariance kernels
//!
//! Provides a unified error type for all covariance-kernel crates.

use thiserror::Error;

/// Core error type for covariance kernel operations
#[derive(Error, Debug)]
pub enum Error {
    /// An argument's length does not match the kernel's input dimension
    #[error("Dimension mismatch: {argument} has dimension={actual}, expected dimension={expected}")]
    DimensionMismatch {
        argument: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The kernel family only supports unidimensional output
    #[error("{kernel} only supports unidimensional models (got output dimension={actual})")]
    InvalidOutputDimension { kernel: &'static str, actual: usize },

    /// Invalid parameter provided to a constructor or mutator
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A key is absent from a parameter store
    #[error("Missing key: {0}")]
    MissingKey(String),

    /// A stored value has a different type than requested
    #[error("Type mismatch for key {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// No constructor is registered under this class name
    #[error("Unknown kernel: {0}")]
    UnknownKernel(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an argument of the wrong length
    pub fn dimension_mismatch(argument: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            argument,
            expected,
            actual,
        }
    }

    /// Create an error for a value that must be strictly positive and finite
    pub fn non_positive(name: &str, index: usize, value: f64) -> Self {
        Self::InvalidParameter(format!(
            "{name}[{index}] must be positive and finite, got {value}"
        ))
    }

    /// Check that `actual` equals `expected`, naming the offending argument
    pub fn check_dimension(argument: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(Self::dimension_mismatch(argument, expected, actual));
        }
        Ok(())
    }
}
