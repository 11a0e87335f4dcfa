//! # Tolerant log parsing for binstat.
//!
//! The log format this crate reads has no fixed grammar: field delimiters
//! vary per row, header lines are optional, and sections end at whichever
//! terminator keyword happens to appear first. The parser therefore works
//! line by line, recovering locally from anything malformed: bad rows are
//! dropped, candidate records without a raw-data section are dropped, and
//! only a source that cannot be read at all is skipped as a whole.
//!
//! The marker vocabulary in [`consts`] is the complete coupling to the log
//! format; porting the parser to a new format means changing those literals
//! only.

pub mod consts;
pub mod extractor;
pub mod parser;
pub mod scanner;

// re-exports
pub use extractor::*;
pub use parser::*;
pub use scanner::*;
