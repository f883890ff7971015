//! Central finite-difference Greeks for the lattice pricer.
//!
//! Each sensitivity bumps one input symmetrically and re-runs the lattice,
//! so a full report costs nine lattice evaluations: one base, two per
//! first-order Greek, with the spot pair reused for gamma.

use surface_core::PricingInputs;

use crate::greeks::GreeksReport;
use crate::lattice::{LatticeError, TrinomialPricer};

/// Relative bump sizes for each input dimension.
///
/// Bumps are proportional to the input being bumped, so a quote in cents
/// and a quote in dollars see the same relative perturbation. The rate
/// bump is proportional to the rate itself, which means a flat-zero rate
/// produces a zero-width stencil and a NaN rho; callers that need rho at
/// `r = 0` must supply an absolute bump via [`FdBumps`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdBumps {
    /// Spot bump as a fraction of spot.
    pub spot: f64,
    /// Expiry bump as a fraction of tau.
    pub tau: f64,
    /// Rate bump as a fraction of the rate.
    pub rate: f64,
    /// Volatility bump as a fraction of vol.
    pub vol: f64,
}

impl Default for FdBumps {
    fn default() -> Self {
        Self {
            spot: 0.05,
            tau: 0.01,
            rate: 0.01,
            vol: 0.01,
        }
    }
}

/// Finite-difference Greek engine wrapping a [`TrinomialPricer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdEngine {
    pricer: TrinomialPricer,
    bumps: FdBumps,
}

impl FdEngine {
    /// Engine over the given pricer with default bump sizes.
    pub fn new(pricer: TrinomialPricer) -> Self {
        Self {
            pricer,
            bumps: FdBumps::default(),
        }
    }

    /// Engine with explicit bump sizes.
    pub fn with_bumps(pricer: TrinomialPricer, bumps: FdBumps) -> Self {
        Self { pricer, bumps }
    }

    /// Price and all five Greeks for one contract.
    ///
    /// # Errors
    /// Propagates [`LatticeError`] from any of the nine lattice
    /// evaluations; a bump can push otherwise-valid inputs into the
    /// invalid-probability region.
    pub fn greeks(&self, inputs: &PricingInputs, is_call: bool) -> Result<GreeksReport, LatticeError> {
        let price = self.pricer.price(inputs, is_call)?;

        let h_spot = self.bumps.spot * inputs.spot;
        let spot_up = self
            .pricer
            .price(&inputs.with_spot(inputs.spot + h_spot), is_call)?;
        let spot_down = self
            .pricer
            .price(&inputs.with_spot(inputs.spot - h_spot), is_call)?;
        let delta = (spot_up - spot_down) / (2.0 * h_spot);
        let gamma = (spot_up - 2.0 * price + spot_down) / (h_spot * h_spot);

        let h_vol = self.bumps.vol * inputs.vol;
        let vol_up = self
            .pricer
            .price(&inputs.with_vol(inputs.vol + h_vol), is_call)?;
        let vol_down = self
            .pricer
            .price(&inputs.with_vol(inputs.vol - h_vol), is_call)?;
        let vega = (vol_up - vol_down) / (2.0 * h_vol);

        let h_tau = self.bumps.tau * inputs.tau;
        let tau_up = self
            .pricer
            .price(&inputs.with_tau(inputs.tau + h_tau), is_call)?;
        let tau_down = self
            .pricer
            .price(&inputs.with_tau(inputs.tau - h_tau), is_call)?;
        // More time to expiry raises the value; decay is the negative.
        let theta = -(tau_up - tau_down) / (2.0 * h_tau);

        let h_rate = self.bumps.rate * inputs.rate;
        let rate_up = self
            .pricer
            .price(&inputs.with_rate(inputs.rate + h_rate), is_call)?;
        let rate_down = self
            .pricer
            .price(&inputs.with_rate(inputs.rate - h_rate), is_call)?;
        let rho = (rate_up - rate_down) / (2.0 * h_rate);

        Ok(GreeksReport {
            price,
            delta,
            gamma,
            vega,
            theta,
            rho,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes;
    use approx::assert_abs_diff_eq;

    fn atm() -> PricingInputs {
        PricingInputs {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            div_yield: 0.0,
            vol: 0.2,
            tau: 1.0,
        }
    }

    fn engine() -> FdEngine {
        FdEngine::new(TrinomialPricer::new())
    }

    #[test]
    fn test_call_greeks_track_closed_form_without_dividends() {
        // An American call on a non-dividend-paying asset is European in
        // value, so the lattice Greeks should track the analytical ones up
        // to discretisation and stencil error.
        let params = atm();
        let fd = engine().greeks(&params, true).unwrap();
        let analytic = black_scholes::call_greeks(&params);

        assert_abs_diff_eq!(fd.price, analytic.price, epsilon = 0.05);
        assert_abs_diff_eq!(fd.delta, analytic.delta, epsilon = 0.05);
        assert_abs_diff_eq!(fd.gamma, analytic.gamma, epsilon = 0.005);
        assert_abs_diff_eq!(fd.vega, analytic.vega, epsilon = 1.5);
        assert_abs_diff_eq!(fd.theta, analytic.theta, epsilon = 1.0);
        assert_abs_diff_eq!(fd.rho, analytic.rho, epsilon = 2.0);
    }

    #[test]
    fn test_greek_signs_for_atm_put() {
        let fd = engine().greeks(&atm(), false).unwrap();
        assert!(fd.delta < 0.0 && fd.delta > -1.0);
        assert!(fd.gamma > 0.0);
        assert!(fd.vega > 0.0);
        assert!(fd.theta < 0.0);
        assert!(fd.rho < 0.0);
    }

    #[test]
    fn test_zero_rate_rho_is_nan() {
        // Relative bumps collapse the rho stencil at r = 0; the result is
        // NaN rather than a fabricated number.
        let params = PricingInputs {
            rate: 0.0,
            ..atm()
        };
        let fd = engine().greeks(&params, true).unwrap();
        assert!(fd.rho.is_nan());
        assert!(fd.delta.is_finite());
    }

    #[test]
    fn test_invalid_probabilities_propagate() {
        let params = PricingInputs {
            spot: 100.0,
            strike: 100.0,
            rate: 0.5,
            div_yield: 0.0,
            vol: 0.01,
            tau: 5.0,
        };
        let err = engine().greeks(&params, true).unwrap_err();
        assert!(matches!(err, LatticeError::InvalidProbabilities { .. }));
    }

    #[test]
    fn test_custom_bumps_respected() {
        // A wider vol stencil still lands near the same vega.
        let wide = FdEngine::with_bumps(
            TrinomialPricer::new(),
            FdBumps {
                vol: 0.05,
                ..FdBumps::default()
            },
        );
        let narrow = engine();
        let params = atm();
        let v_wide = wide.greeks(&params, true).unwrap().vega;
        let v_narrow = narrow.greeks(&params, true).unwrap().vega;
        assert_abs_diff_eq!(v_wide, v_narrow, epsilon = 2.0);
    }

    #[test]
    fn test_deterministic() {
        let params = atm();
        let first = engine().greeks(&params, false).unwrap();
        let second = engine().greeks(&params, false).unwrap();
        assert_eq!(first, second);
    }
}
