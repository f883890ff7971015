//! Black-Scholes-Merton pricing with analytical Greeks.
//!
//! The Merton extension carries a continuous dividend yield `q`; with
//! `q = 0` the formulas reduce to plain Black-Scholes. Price and all five
//! sensitivities come from one pass over the shared `d1`/`d2` terms, so a
//! full report costs barely more than a lone price.
//!
//! Conventions: theta is the raw calendar decay `dV/dt = -dV/dτ` (long
//! options decay, so it is typically negative), vega is per unit of
//! volatility and rho per unit of rate (not per percentage point).

use surface_core::{norm_cdf, norm_pdf, PricingInputs};

use crate::greeks::GreeksReport;

/// The `d1`/`d2` terms shared by every formula below.
#[inline]
fn d1_d2(inputs: &PricingInputs) -> (f64, f64) {
    let sqrt_tau = inputs.tau.sqrt();
    let vol_sqrt_tau = inputs.vol * sqrt_tau;
    let d1 = ((inputs.spot / inputs.strike).ln()
        + (inputs.rate - inputs.div_yield + 0.5 * inputs.vol * inputs.vol) * inputs.tau)
        / vol_sqrt_tau;
    (d1, d1 - vol_sqrt_tau)
}

/// Price and Greeks of a European call.
pub fn call_greeks(inputs: &PricingInputs) -> GreeksReport {
    let (d1, d2) = d1_d2(inputs);
    let sqrt_tau = inputs.tau.sqrt();
    let df_div = (-inputs.div_yield * inputs.tau).exp();
    let df_rate = (-inputs.rate * inputs.tau).exp();

    let price = inputs.spot * df_div * norm_cdf(d1) - inputs.strike * df_rate * norm_cdf(d2);
    let delta = df_div * norm_cdf(d1);
    let gamma = df_div * norm_pdf(d1) / (inputs.spot * inputs.vol * sqrt_tau);
    let vega = inputs.spot * df_div * norm_pdf(d1) * sqrt_tau;
    let decay = -inputs.spot * norm_pdf(d1) * inputs.vol * df_div / (2.0 * sqrt_tau);
    let theta = decay - inputs.rate * inputs.strike * df_rate * norm_cdf(d2)
        + inputs.div_yield * inputs.spot * df_div * norm_cdf(d1);
    let rho = inputs.strike * inputs.tau * df_rate * norm_cdf(d2);

    GreeksReport {
        price,
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// Price and Greeks of a European put.
pub fn put_greeks(inputs: &PricingInputs) -> GreeksReport {
    let (d1, d2) = d1_d2(inputs);
    let sqrt_tau = inputs.tau.sqrt();
    let df_div = (-inputs.div_yield * inputs.tau).exp();
    let df_rate = (-inputs.rate * inputs.tau).exp();

    let price = inputs.strike * df_rate * norm_cdf(-d2) - inputs.spot * df_div * norm_cdf(-d1);
    let delta = df_div * (norm_cdf(d1) - 1.0);
    // Gamma and vega are exercise-direction agnostic.
    let gamma = df_div * norm_pdf(d1) / (inputs.spot * inputs.vol * sqrt_tau);
    let vega = inputs.spot * df_div * norm_pdf(d1) * sqrt_tau;
    let decay = -inputs.spot * norm_pdf(d1) * inputs.vol * df_div / (2.0 * sqrt_tau);
    let theta = decay + inputs.rate * inputs.strike * df_rate * norm_cdf(-d2)
        - inputs.div_yield * inputs.spot * df_div * norm_cdf(-d1);
    let rho = -inputs.strike * inputs.tau * df_rate * norm_cdf(-d2);

    GreeksReport {
        price,
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// Dispatch on exercise direction.
pub fn european_greeks(inputs: &PricingInputs, is_call: bool) -> GreeksReport {
    if is_call {
        call_greeks(inputs)
    } else {
        put_greeks(inputs)
    }
}
