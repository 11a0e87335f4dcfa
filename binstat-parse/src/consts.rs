//! Marker vocabulary of the log format. Matched literally and
//! case-sensitively against line-trimmed text.

/// Opens a bin record; the identifier follows the colon.
pub const BIN_MARKER: &str = "Bin #:";

/// Carries the test name of the enclosing bin record.
pub const NAME_MARKER: &str = "Name:";

/// Opens the raw-data matrix section; matched as the entire trimmed line.
pub const RAW_DATA_MARKER: &str = "Raw Data:";

/// A line containing this keyword right after the raw-data marker is a
/// column-header row and is skipped.
pub const COLUMN_HEADER_KEY: &str = "Column";

/// Any of these, contained anywhere in a trimmed line, ends the matrix.
pub const TERMINATOR_KEYWORDS: [&str; 5] =
    ["Limits:", "PASS/FAIL:", "Test Started", "Bin #:", "END_UUT"];

/// How far past a bin marker to look for its raw-data section.
pub const LOOKAHEAD_WINDOW: usize = 300;
