//! The full valuation report for a single contract.

use serde::{Deserialize, Serialize};
use surface_core::GreekKind;

/// Price plus first-order sensitivities for one option contract.
///
/// Both the analytical and the finite-difference paths produce this struct,
/// so downstream grid assembly never needs to know which model ran.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreeksReport {
    /// Present value of the contract.
    pub price: f64,
    /// Sensitivity to the spot price (dV/dS).
    pub delta: f64,
    /// Convexity in the spot price (d²V/dS²).
    pub gamma: f64,
    /// Sensitivity to volatility (dV/dσ).
    pub vega: f64,
    /// Time decay, reported as -dV/dτ so holding a long option shows a
    /// negative value.
    pub theta: f64,
    /// Sensitivity to the risk-free rate (dV/dr).
    pub rho: f64,
}

impl GreeksReport {
    /// Select one measure from the report by kind.
    pub fn get(&self, greek: GreekKind) -> f64 {
        match greek {
            GreekKind::Price => self.price,
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Vega => self.vega,
            GreekKind::Theta => self.theta,
            GreekKind::Rho => self.rho,
        }
    }

    /// The report laid out in [`GreekKind`] index order.
    pub fn as_array(&self) -> [f64; GreekKind::COUNT] {
        [
            self.price, self.delta, self.gamma, self.vega, self.theta, self.rho,
        ]
    }
}
