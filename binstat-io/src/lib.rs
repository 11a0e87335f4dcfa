//! # Input/Output utilities for binstat.
//!
//! This small crate turns raw log files into normalized text lines for the
//! parser. It owns the multi-encoding decode fallback (UTF-8 first, then the
//! East-Asian legacy encodings, then a permissive single-byte fallback),
//! transparent gzip handling, and glob-based discovery of log files.

pub mod decoder;
pub mod error;
pub mod files;

// re-expose core functions
pub use decoder::*;
pub use error::*;
pub use files::*;
