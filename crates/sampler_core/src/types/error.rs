//! Error types for structured error handling.
//!
//! Sampling is total over its valid input domain. The only failures are
//! programmer errors surfaced immediately to the caller:
//! - `SamplerError::InvalidArgument`: a non-positive bound for an integer draw
//! - `SamplerError::EmptyCollection`: `choose` over a collection with no elements

use thiserror::Error;

/// Sampling errors.
///
/// # Examples
/// ```
/// use sampler_core::types::SamplerError;
///
/// let err = SamplerError::InvalidArgument {
///     name: "bound",
///     reason: "must be positive, got 0".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument 'bound': must be positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// Argument outside the domain of the operation.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Uniform choice requested from a collection with no elements.
    #[error("Cannot choose from an empty collection")]
    EmptyCollection,
}

impl SamplerError {
    /// Shorthand for a non-positive integer bound.
    pub(crate) fn non_positive_bound(bound: i32) -> Self {
        SamplerError::InvalidArgument {
            name: "bound",
            reason: format!("must be positive, got {}", bound),
        }
    }
}
