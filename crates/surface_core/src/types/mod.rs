//! Value types shared across the engine.
//!
//! This module provides:
//! - [`option::OptionKind`] / [`option::GreekKind`]: closed enumerations
//!   with stable ordinals
//! - [`request::SurfaceRequest`]: a validated grid request and its cache
//!   fingerprint
//! - [`error::ValidationError`]: structured rejection reasons

pub mod error;
pub mod option;
pub mod request;

pub use error::ValidationError;
pub use option::{GreekKind, OptionKind};
pub use request::{PricingInputs, RequestKey, SurfaceRequest};
