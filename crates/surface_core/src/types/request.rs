//! Grid request types and the deterministic cache fingerprint.
//!
//! This module provides:
//! - `PricingInputs`: the per-cell scalar inputs consumed by the pricers
//! - `SurfaceRequest`: a validated grid request (market parameters + two
//!   axis ranges + resolution)
//! - `RequestKey`: a bit-exact fingerprint of a request, used as cache key

use serde::{Deserialize, Serialize};

use crate::types::error::ValidationError;

/// Scalar inputs for pricing a single option.
///
/// A grid evaluation holds `spot`, `rate`, `div_yield` and `tau` fixed and
/// varies `vol` and `strike` across the two axes. The type is a plain value:
/// validation happens once at the [`SurfaceRequest`] boundary, and the
/// finite-difference estimator freely constructs bumped copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Spot price S.
    pub spot: f64,
    /// Strike K.
    pub strike: f64,
    /// Continuously compounded risk-free rate r.
    pub rate: f64,
    /// Continuous dividend yield q.
    pub div_yield: f64,
    /// Volatility sigma.
    pub vol: f64,
    /// Time to maturity tau in years.
    pub tau: f64,
}

impl PricingInputs {
    /// Copy with a replaced spot price.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy with a replaced volatility.
    #[inline]
    pub fn with_vol(self, vol: f64) -> Self {
        Self { vol, ..self }
    }

    /// Copy with a replaced time to maturity.
    #[inline]
    pub fn with_tau(self, tau: f64) -> Self {
        Self { tau, ..self }
    }

    /// Copy with a replaced risk-free rate.
    #[inline]
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }
}

/// A validated grid request.
///
/// Fully determines one deterministic result tensor: two requests with
/// bit-identical fields produce bit-identical tensors. Construction rejects
/// degenerate inputs before any pricing work begins, so a value of this type
/// is always priceable.
///
/// # Examples
/// ```
/// use surface_core::SurfaceRequest;
///
/// let request =
///     SurfaceRequest::new(10, 10, 100.0, 0.05, 0.02, 1.0, (0.1, 0.4), (80.0, 120.0)).unwrap();
/// assert_eq!(request.rows(), 10);
///
/// // Inverted sigma bounds are rejected up front.
/// assert!(SurfaceRequest::new(10, 10, 100.0, 0.05, 0.02, 1.0, (0.5, 0.1), (80.0, 120.0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRequest {
    rows: usize,
    cols: usize,
    spot: f64,
    rate: f64,
    div_yield: f64,
    tau: f64,
    sigma_lo: f64,
    sigma_hi: f64,
    strike_lo: f64,
    strike_hi: f64,
}

impl SurfaceRequest {
    /// Build a request, validating every field.
    ///
    /// # Arguments
    /// * `rows` - Number of volatility steps (>= 2)
    /// * `cols` - Number of strike steps (>= 2)
    /// * `spot` - Spot price (> 0)
    /// * `rate` - Risk-free rate (any sign)
    /// * `div_yield` - Dividend yield (>= 0)
    /// * `tau` - Time to maturity in years (> 0)
    /// * `sigma_bounds` - Inclusive volatility axis `(lo, hi)`, `0 < lo < hi`
    /// * `strike_bounds` - Inclusive strike axis `(lo, hi)`, `0 < lo < hi`
    ///
    /// # Errors
    /// A [`ValidationError`] naming the first rejected field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rows: usize,
        cols: usize,
        spot: f64,
        rate: f64,
        div_yield: f64,
        tau: f64,
        sigma_bounds: (f64, f64),
        strike_bounds: (f64, f64),
    ) -> Result<Self, ValidationError> {
        let (sigma_lo, sigma_hi) = sigma_bounds;
        let (strike_lo, strike_hi) = strike_bounds;

        if !(spot > 0.0) {
            return Err(ValidationError::NonPositiveSpot { spot });
        }
        if !(tau > 0.0) {
            return Err(ValidationError::NonPositiveTau { tau });
        }
        if !(div_yield >= 0.0) {
            return Err(ValidationError::NegativeDividendYield { div_yield });
        }
        if !(sigma_lo > 0.0 && sigma_lo < sigma_hi) {
            return Err(ValidationError::InvalidAxisBounds {
                axis: "sigma",
                lo: sigma_lo,
                hi: sigma_hi,
            });
        }
        if !(strike_lo > 0.0 && strike_lo < strike_hi) {
            return Err(ValidationError::InvalidAxisBounds {
                axis: "strike",
                lo: strike_lo,
                hi: strike_hi,
            });
        }
        if rows < 2 {
            return Err(ValidationError::ResolutionTooSmall {
                axis: "sigma",
                got: rows,
            });
        }
        if cols < 2 {
            return Err(ValidationError::ResolutionTooSmall {
                axis: "strike",
                got: cols,
            });
        }

        Ok(Self {
            rows,
            cols,
            spot,
            rate,
            div_yield,
            tau,
            sigma_lo,
            sigma_hi,
            strike_lo,
            strike_hi,
        })
    }

    /// Number of volatility steps (tensor rows).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of strike steps (tensor columns).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend yield.
    #[inline]
    pub fn div_yield(&self) -> f64 {
        self.div_yield
    }

    /// Time to maturity.
    #[inline]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Volatility axis bounds `(lo, hi)`.
    #[inline]
    pub fn sigma_bounds(&self) -> (f64, f64) {
        (self.sigma_lo, self.sigma_hi)
    }

    /// Strike axis bounds `(lo, hi)`.
    #[inline]
    pub fn strike_bounds(&self) -> (f64, f64) {
        (self.strike_lo, self.strike_hi)
    }

    /// Per-cell pricing inputs for one `(sigma, strike)` grid point.
    #[inline]
    pub fn cell_inputs(&self, vol: f64, strike: f64) -> PricingInputs {
        PricingInputs {
            spot: self.spot,
            strike,
            rate: self.rate,
            div_yield: self.div_yield,
            vol,
            tau: self.tau,
        }
    }

    /// Deterministic fingerprint over every numeric field.
    ///
    /// The requested Greek is deliberately not part of the key: all Greeks
    /// are computed and cached together, so requests for different Greeks
    /// against identical market parameters hit the same entry. Floats are
    /// keyed by their raw bit pattern, making the fingerprint exact (no
    /// epsilon comparisons, `-0.0 != 0.0`).
    pub fn fingerprint(&self) -> RequestKey {
        RequestKey {
            field_bits: [
                self.spot.to_bits(),
                self.rate.to_bits(),
                self.div_yield.to_bits(),
                self.tau.to_bits(),
                self.sigma_lo.to_bits(),
                self.sigma_hi.to_bits(),
                self.strike_lo.to_bits(),
                self.strike_hi.to_bits(),
            ],
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Bit-exact cache key derived from a [`SurfaceRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    field_bits: [u64; 8],
    rows: usize,
    cols: usize,
}
