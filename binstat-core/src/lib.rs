//! # Core data model for binstat.
//!
//! This crate defines the types shared by the binstat pipeline: the irregular
//! [`RawMatrix`] produced by parsing, the [`RawRecord`] emitted per bin
//! occurrence, the [`BinGroup`] built during aggregation, and the dense
//! [`StatMatrix`] / [`BinStatistics`] results handed to report renderers.
//! It also defines [`BinKey`], the explicit total order used to sort bin
//! identifiers for output.

pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use models::{
    BinGroup, BinStatistics, CorpusStatistics, RawMatrix, RawRecord, StatMatrix,
    UNKNOWN_TEST_NAME,
};
pub use utils::BinKey;
