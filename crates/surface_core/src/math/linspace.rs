//! Inclusive linearly spaced axis construction.
//!
//! The grid evaluator builds both of its axes with [`linspace`], and the
//! function is public so callers can reconstruct axis labels with the exact
//! same spacing formula (a label built any other way may disagree with the
//! grid in the last bit).

use crate::types::error::ValidationError;

/// `n` evenly spaced points over `[lo, hi]`, inclusive of both endpoints.
///
/// Points are `lo + i * (hi - lo) / (n - 1)`; the final element is forced to
/// exactly `hi` so the upper endpoint is never off by a rounding ulp.
///
/// # Errors
/// `n < 2` cannot define an axis and is rejected.
///
/// # Examples
/// ```
/// use surface_core::linspace;
///
/// let axis = linspace(5, 0.0, 1.0).unwrap();
/// assert_eq!(axis, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(n: usize, lo: f64, hi: f64) -> Result<Vec<f64>, ValidationError> {
    if n < 2 {
        return Err(ValidationError::ResolutionTooSmall {
            axis: "linspace",
            got: n,
        });
    }

    let step = (hi - lo) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
    points[n - 1] = hi;
    Ok(points)
}
