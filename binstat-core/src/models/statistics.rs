use crate::models::matrix::StatMatrix;

///
/// BinStatistics, the aggregation result for one bin identifier.
///
/// `shape` is the reconciled `(rows, cols)` of the group; the four statistic
/// matrices all have exactly that shape.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinStatistics {
    pub bin_id: String,
    pub test_name: String,
    pub sample_count: usize,
    pub shape: (usize, usize),
    pub avg: StatMatrix,
    pub max: StatMatrix,
    pub min: StatMatrix,
    pub std: StatMatrix,
}

///
/// The full aggregation output: one [`BinStatistics`] per distinct bin
/// identifier, ordered by [`crate::BinKey`] (numeric identifiers first).
///
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CorpusStatistics {
    pub bins: Vec<BinStatistics>,
}

impl CorpusStatistics {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn get(&self, bin_id: &str) -> Option<&BinStatistics> {
        self.bins.iter().find(|b| b.bin_id == bin_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BinStatistics> {
        self.bins.iter()
    }
}
