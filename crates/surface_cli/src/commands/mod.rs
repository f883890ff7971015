//! Command implementations.

pub mod check;
pub mod evaluate;
