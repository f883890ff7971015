//! Greek computation for lattice-priced contracts.
//!
//! Closed-form pricers differentiate analytically; the lattice cannot, so
//! this module bumps inputs and re-prices. Both paths report through the
//! shared [`GreeksReport`] struct.

pub mod finite_difference;
pub mod result;

pub use finite_difference::{FdBumps, FdEngine};
pub use result::GreeksReport;
