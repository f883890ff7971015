//! Validation errors for request construction.
//!
//! This module provides:
//! - `ValidationError`: structured rejection reasons raised before any
//!   pricing work begins

use thiserror::Error;

/// Request validation errors.
///
/// Every variant carries the offending value(s) so callers can report the
/// exact field that was rejected. All variants are raised at request
/// construction time; a constructed [`crate::SurfaceRequest`] is always
/// priceable.
///
/// # Examples
/// ```
/// use surface_core::ValidationError;
///
/// let err = ValidationError::InvalidAxisBounds {
///     axis: "sigma",
///     lo: 0.5,
///     hi: 0.1,
/// };
/// assert!(format!("{}", err).contains("sigma"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Spot price must be strictly positive.
    #[error("Invalid spot price: S = {spot} (must be > 0)")]
    NonPositiveSpot {
        /// The rejected spot price.
        spot: f64,
    },

    /// Time to maturity must be strictly positive.
    #[error("Invalid time to maturity: tau = {tau} (must be > 0)")]
    NonPositiveTau {
        /// The rejected time to maturity.
        tau: f64,
    },

    /// Dividend yield must be non-negative.
    #[error("Invalid dividend yield: q = {div_yield} (must be >= 0)")]
    NegativeDividendYield {
        /// The rejected dividend yield.
        div_yield: f64,
    },

    /// Axis bounds must satisfy `0 < lo < hi`.
    #[error("Invalid {axis} axis bounds: [{lo}, {hi}] (need 0 < lo < hi)")]
    InvalidAxisBounds {
        /// Which axis was rejected (`"sigma"` or `"strike"`).
        axis: &'static str,
        /// Lower bound as supplied.
        lo: f64,
        /// Upper bound as supplied.
        hi: f64,
    },

    /// Axis resolution must be at least 2 to define an axis.
    #[error("Invalid {axis} axis resolution: {got} (minimum 2)")]
    ResolutionTooSmall {
        /// Which axis was rejected (`"sigma"` or `"strike"`).
        axis: &'static str,
        /// Resolution as supplied.
        got: usize,
    },

    /// Unrecognised Greek name.
    #[error("Unknown greek: {0} (expected price, delta, gamma, vega, theta or rho)")]
    UnknownGreek(String),
}
