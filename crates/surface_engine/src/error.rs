//! Engine-level error types.

use surface_core::{OptionKind, ValidationError};
use surface_models::LatticeError;
use thiserror::Error;

/// Errors surfaced by grid evaluation and the cache front-end.
///
/// `Clone` is required: when concurrent identical requests are coalesced
/// into one evaluation, a failure is handed to every waiting caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The request failed validation.
    #[error("invalid surface request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// A single grid cell failed to price.
    ///
    /// One bad cell fails the whole tensor; a partially filled surface
    /// would be worse than no surface.
    #[error("cell ({row}, {col}) failed pricing {option}: {source}")]
    CellFailure {
        /// Volatility-axis index of the failing cell.
        row: usize,
        /// Strike-axis index of the failing cell.
        col: usize,
        /// The option variant being priced when the failure occurred.
        option: OptionKind,
        /// The underlying lattice failure.
        #[source]
        source: LatticeError,
    },
}
