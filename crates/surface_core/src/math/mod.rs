//! Math primitives shared by the pricers and the grid evaluator.

pub mod distributions;
pub mod linspace;

pub use distributions::{norm_cdf, norm_pdf};
pub use linspace::linspace;
