//! Error types for lattice evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating the trinomial lattice.
///
/// `Clone` so a single failure can be fanned out to every caller waiting on
/// a coalesced evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// The branch probabilities implied by the inputs left [0, 1].
    ///
    /// This happens when the drift term dominates the volatility term for
    /// the chosen time step (typically very low vol combined with a large
    /// rate or long expiry). The evaluation is aborted rather than clamped:
    /// a clamped probability would price, but the number would be silently
    /// wrong.
    #[error(
        "trinomial branch probabilities out of range: p_up={p_up}, p_mid={p_mid}, p_down={p_down} \
         (vol={vol}, tau={tau}, rate={rate}, div_yield={div_yield})"
    )]
    InvalidProbabilities {
        /// Up-branch probability.
        p_up: f64,
        /// Middle-branch probability.
        p_mid: f64,
        /// Down-branch probability.
        p_down: f64,
        /// Volatility that produced the probabilities.
        vol: f64,
        /// Time to expiry that produced the probabilities.
        tau: f64,
        /// Risk-free rate that produced the probabilities.
        rate: f64,
        /// Continuous dividend yield that produced the probabilities.
        div_yield: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probabilities_display() {
        let err = LatticeError::InvalidProbabilities {
            p_up: 1.2,
            p_mid: 0.6666666666666666,
            p_down: -0.2,
            vol: 0.01,
            tau: 5.0,
            rate: 0.5,
            div_yield: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("p_up=1.2"));
        assert!(msg.contains("p_down=-0.2"));
        assert!(msg.contains("vol=0.01"));
    }
}
