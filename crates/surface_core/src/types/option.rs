//! Contract-variant and Greek enumerations.
//!
//! Both enumerations carry a stable ordinal (`index()`) that defines the
//! layout of the result tensor: option kinds occupy axis 2 in the order
//! `AmerCall, AmerPut, EuroCall, EuroPut`, Greeks occupy axis 3 in the order
//! `Price, Delta, Gamma, Vega, Theta, Rho`. Reordering either enumeration is
//! a breaking change for every cached tensor and downstream consumer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::error::ValidationError;

/// The four priced contract variants.
///
/// American variants support early exercise and are priced on the trinomial
/// lattice; European variants are priced in closed form.
///
/// # Examples
/// ```
/// use surface_core::OptionKind;
///
/// assert!(OptionKind::AmerPut.is_american());
/// assert!(!OptionKind::AmerPut.is_call());
/// assert_eq!(OptionKind::EuroPut.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// American call (early exercise, lattice-priced).
    AmerCall,
    /// American put (early exercise, lattice-priced).
    AmerPut,
    /// European call (closed-form).
    EuroCall,
    /// European put (closed-form).
    EuroPut,
}

impl OptionKind {
    /// All variants in tensor-axis order.
    pub const ALL: [OptionKind; 4] = [
        OptionKind::AmerCall,
        OptionKind::AmerPut,
        OptionKind::EuroCall,
        OptionKind::EuroPut,
    ];

    /// Number of contract variants.
    pub const COUNT: usize = 4;

    /// Stable ordinal used for tensor indexing.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            OptionKind::AmerCall => 0,
            OptionKind::AmerPut => 1,
            OptionKind::EuroCall => 2,
            OptionKind::EuroPut => 3,
        }
    }

    /// True for the two call variants.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::AmerCall | OptionKind::EuroCall)
    }

    /// True for the two early-exercise variants.
    #[inline]
    pub fn is_american(self) -> bool {
        matches!(self, OptionKind::AmerCall | OptionKind::AmerPut)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::AmerCall => "American call",
            OptionKind::AmerPut => "American put",
            OptionKind::EuroCall => "European call",
            OptionKind::EuroPut => "European put",
        };
        write!(f, "{}", name)
    }
}

/// The six per-cell valuation outputs.
///
/// `Price` is the base valuation and always occupies Greek index 0; the five
/// sensitivities follow. Every grid evaluation fills all six slots so that a
/// later request for a different Greek over the same market parameters is a
/// cache hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GreekKind {
    /// Base valuation (index 0 by contract).
    Price,
    /// Sensitivity to spot.
    Delta,
    /// Spot convexity.
    Gamma,
    /// Sensitivity to volatility.
    Vega,
    /// Value decay as time-to-maturity shrinks.
    Theta,
    /// Sensitivity to the risk-free rate.
    Rho,
}

impl GreekKind {
    /// All Greeks in tensor-axis order.
    pub const ALL: [GreekKind; 6] = [
        GreekKind::Price,
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Vega,
        GreekKind::Theta,
        GreekKind::Rho,
    ];

    /// Number of Greeks.
    pub const COUNT: usize = 6;

    /// Stable ordinal used for tensor indexing.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            GreekKind::Price => 0,
            GreekKind::Delta => 1,
            GreekKind::Gamma => 2,
            GreekKind::Vega => 3,
            GreekKind::Theta => 4,
            GreekKind::Rho => 5,
        }
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GreekKind::Price => "price",
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Vega => "vega",
            GreekKind::Theta => "theta",
            GreekKind::Rho => "rho",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GreekKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price" => Ok(GreekKind::Price),
            "delta" => Ok(GreekKind::Delta),
            "gamma" => Ok(GreekKind::Gamma),
            "vega" => Ok(GreekKind::Vega),
            "theta" => Ok(GreekKind::Theta),
            "rho" => Ok(GreekKind::Rho),
            _ => Err(ValidationError::UnknownGreek(s.to_string())),
        }
    }
}
