//! # Corpus aggregation for binstat.
//!
//! Groups parsed [`binstat_core::RawRecord`]s by bin identifier and computes
//! the per-cell average, maximum, minimum and sample standard deviation of
//! each group, after reconciling the contributing matrices to their common
//! minimum shape.

pub mod aggregate;
pub mod error;

// re-exports
pub use aggregate::*;
pub use error::*;
