//! # Surface Engine
//!
//! Turns a validated [`SurfaceRequest`](surface_core::SurfaceRequest) into a
//! full valuation tensor and serves repeated requests from a bounded cache.
//!
//! The pipeline:
//! 1. [`evaluate::evaluate_surface`] prices every `(sigma, strike)` cell in
//!    parallel with rayon, producing a [`SurfaceTensor`] covering all four
//!    option variants and all six measures
//! 2. [`SurfaceManager`] fronts the evaluator with an LRU cache keyed on the
//!    request fingerprint and coalesces concurrent identical requests into a
//!    single evaluation
//!
//! Determinism is load-bearing: cell results are written by fixed index, so
//! thread scheduling never changes a single bit of the output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod manager;
pub mod tensor;

pub use cache::LruCache;
pub use config::{ConfigError, EngineConfig};
pub use error::EngineError;
pub use evaluate::evaluate_surface;
pub use manager::{EngineStats, SurfaceManager};
pub use tensor::{GreekGrid, GreekSurfaces, SurfaceTensor};
