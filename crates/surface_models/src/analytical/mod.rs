//! Closed-form valuation for European-exercise contracts.

pub mod black_scholes;

pub use black_scholes::{call_greeks, european_greeks, put_greeks};
