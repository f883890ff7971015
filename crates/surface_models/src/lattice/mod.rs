//! Recombining trinomial lattice for American-exercise contracts.

pub mod error;
pub mod trinomial;

pub use error::LatticeError;
pub use trinomial::{TrinomialPricer, DEFAULT_DEPTH};
