use std::io;
use thiserror::Error;

/// Error type for binstat-io operations.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The source could not be read at all.
    #[error("Can't read source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for binstat-io operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
