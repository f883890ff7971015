//! Trinomial lattice pricer with early exercise.
//!
//! A recombining tree in the spirit of Kamrad-Ritchken: each node branches
//! up, middle, or down with a log-spot step of `sigma * sqrt(3 * dt)`, and
//! backward induction takes the maximum of continuation value and intrinsic
//! value at every node, which prices the American exercise right.

use surface_core::PricingInputs;

use crate::lattice::LatticeError;

/// Default number of time steps.
///
/// Deep enough that the discretisation error is well inside the tolerance of
/// grid valuations quoted to a few decimal places, while keeping a single
/// evaluation fast enough to run nine times per cell for finite-difference
/// Greeks.
pub const DEFAULT_DEPTH: usize = 100;

/// Intrinsic value of a vanilla contract at spot `s`.
#[inline]
fn intrinsic(s: f64, strike: f64, is_call: bool) -> f64 {
    if is_call {
        (s - strike).max(0.0)
    } else {
        (strike - s).max(0.0)
    }
}

/// American-exercise trinomial lattice pricer.
///
/// The pricer is a pure kernel: [`TrinomialPricer::price`] is a
/// deterministic function of its inputs and the configured depth, holds no
/// state between calls, and is safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrinomialPricer {
    depth: usize,
}

impl TrinomialPricer {
    /// Pricer with [`DEFAULT_DEPTH`] time steps.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Pricer with an explicit number of time steps.
    ///
    /// # Panics
    /// Panics if `depth` is zero; a zero-step lattice has no time axis.
    pub fn with_depth(depth: usize) -> Self {
        assert!(depth > 0, "lattice depth must be at least 1");
        Self { depth }
    }

    /// The configured number of time steps.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Price an American call or put by backward induction.
    ///
    /// # Errors
    /// [`LatticeError::InvalidProbabilities`] when the implied branch
    /// probabilities leave `[0, 1]`, which can happen for extreme
    /// drift-to-volatility ratios. Nothing is clamped.
    pub fn price(&self, inputs: &PricingInputs, is_call: bool) -> Result<f64, LatticeError> {
        let depth = self.depth;
        let dt = inputs.tau / depth as f64;
        let sigma_sq = inputs.vol * inputs.vol;

        let up_factor = (inputs.vol * (3.0 * dt).sqrt()).exp();
        let discount = (-inputs.rate * dt).exp();

        let scaling = (dt / (12.0 * sigma_sq)).sqrt();
        let drift = (inputs.rate - inputs.div_yield) - 0.5 * sigma_sq;
        let p_up = scaling * drift + 1.0 / 6.0;
        let p_down = -scaling * drift + 1.0 / 6.0;
        let p_mid = 1.0 - p_up - p_down;

        // `!(0.0..=1.0).contains(..)` also rejects NaN probabilities.
        if !(0.0..=1.0).contains(&p_up)
            || !(0.0..=1.0).contains(&p_mid)
            || !(0.0..=1.0).contains(&p_down)
        {
            return Err(LatticeError::InvalidProbabilities {
                p_up,
                p_mid,
                p_down,
                vol: inputs.vol,
                tau: inputs.tau,
                rate: inputs.rate,
                div_yield: inputs.div_yield,
            });
        }

        // Layer `step` has 2 * step + 1 nodes; node i sits at
        // spot * up_factor^(i - step). Two buffers swapped per step instead
        // of a full (depth + 1)^2 tree.
        let width = 2 * depth + 1;
        let mut next: Vec<f64> = (0..width)
            .map(|node| {
                let s = inputs.spot * up_factor.powi(node as i32 - depth as i32);
                intrinsic(s, inputs.strike, is_call)
            })
            .collect();
        let mut current = vec![0.0; width];

        for step in (0..depth).rev() {
            for node in 0..(2 * step + 1) {
                let continuation =
                    discount * (p_up * next[node + 2] + p_mid * next[node + 1] + p_down * next[node]);
                let s = inputs.spot * up_factor.powi(node as i32 - step as i32);
                current[node] = continuation.max(intrinsic(s, inputs.strike, is_call));
            }
            std::mem::swap(&mut next, &mut current);
        }

        Ok(next[0])
    }
}

impl Default for TrinomialPricer {
    fn default() -> Self {
        Self::new()
    }
}
