use crate::models::matrix::RawMatrix;

/// Test name used when a bin record carries no `Name:` line.
pub const UNKNOWN_TEST_NAME: &str = "Unknown";

///
/// RawRecord, one bin occurrence inside one source file.
///
/// Created by the file parser and consumed by the aggregator; never mutated
/// in between. `source_id` is carried for traceability only and does not
/// take part in grouping.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub bin_id: String,
    pub test_name: String,
    pub matrix: RawMatrix,
    pub source_id: String,
}

///
/// All matrices contributed to one bin identifier across the whole corpus.
///
/// `test_name` is taken from the first record seen for the bin and not
/// revalidated against later records.
///
#[derive(Debug, Clone)]
pub struct BinGroup {
    pub test_name: String,
    pub matrices: Vec<RawMatrix>,
}

impl BinGroup {
    pub fn new(test_name: String) -> Self {
        BinGroup {
            test_name,
            matrices: Vec::new(),
        }
    }

    pub fn push(&mut self, matrix: RawMatrix) {
        self.matrices.push(matrix);
    }

    pub fn sample_count(&self) -> usize {
        self.matrices.len()
    }
}
