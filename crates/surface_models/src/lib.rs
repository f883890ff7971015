//! # Surface Models
//!
//! The pricing kernels of the optsurface grid engine.
//!
//! This crate provides:
//! - Closed-form Black-Scholes-Merton valuation with analytical Greeks for
//!   European contracts (dividend-yield aware)
//! - A recombining trinomial lattice for American contracts (early exercise
//!   via max-with-intrinsic at every node)
//! - A central finite-difference estimator that derives American Greeks from
//!   repeated lattice evaluations
//!
//! ## Design Principles
//!
//! - **Pure kernels**: every pricer is a deterministic function of its
//!   inputs; no hidden state, no caching at this layer
//! - **Hard numerical-validity errors**: out-of-range branch probabilities
//!   fail the evaluation instead of being clamped

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod lattice;

pub use analytical::black_scholes::{call_greeks, european_greeks, put_greeks};
pub use greeks::finite_difference::{FdBumps, FdEngine};
pub use greeks::result::GreeksReport;
pub use lattice::trinomial::TrinomialPricer;
pub use lattice::LatticeError;
