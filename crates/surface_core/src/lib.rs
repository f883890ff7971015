//! # Surface Core
//!
//! Shared foundation for the optsurface option-pricing grid engine.
//!
//! This crate provides:
//! - Contract and Greek enumerations with stable ordinals for tensor layout
//! - Validated request types (`PricingInputs`, `SurfaceRequest`) and the
//!   deterministic cache fingerprint (`RequestKey`)
//! - Structured validation errors
//! - Math primitives: standard normal CDF/PDF and inclusive `linspace`
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: requests are checked on construction so
//!   the pricers never see degenerate inputs
//! - **Stable ordinals**: tensor slicing depends on `OptionKind` and
//!   `GreekKind` index order, which is part of the public contract

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;

pub use math::distributions::{norm_cdf, norm_pdf};
pub use math::linspace::linspace;
pub use types::error::ValidationError;
pub use types::option::{GreekKind, OptionKind};
pub use types::request::{PricingInputs, RequestKey, SurfaceRequest};
