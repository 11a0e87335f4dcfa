pub mod matrix;
pub mod record;
pub mod statistics;

// re-export for cleaner imports
pub use self::matrix::{RawMatrix, StatMatrix};
pub use self::record::{BinGroup, RawRecord, UNKNOWN_TEST_NAME};
pub use self::statistics::{BinStatistics, CorpusStatistics};
