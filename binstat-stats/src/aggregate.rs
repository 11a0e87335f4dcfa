use fxhash::FxHashMap;

use binstat_core::{
    BinGroup, BinKey, BinStatistics, CorpusStatistics, RawMatrix, RawRecord, StatMatrix,
};

use crate::error::{Result, StatsError};

///
/// Group records by their literal bin identifier, preserving first-seen
/// order and the first-seen test name per group. No normalization: `"5"`
/// and `"05"` are distinct groups.
///
pub fn group_records(records: Vec<RawRecord>) -> Vec<(String, BinGroup)> {
    let mut groups: FxHashMap<String, BinGroup> = FxHashMap::default();
    let mut order: Vec<String> = Vec::new();

    for record in records {
        let group = groups.entry(record.bin_id.clone()).or_insert_with(|| {
            order.push(record.bin_id.clone());
            BinGroup::new(record.test_name.clone())
        });
        group.push(record.matrix);
    }

    order
        .into_iter()
        .map(|bin_id| {
            let group = groups.remove(&bin_id).unwrap();
            (bin_id, group)
        })
        .collect()
}

///
/// Working dimensions of a bin group: `rows` is the smallest row count of
/// any contributor, `cols` the smallest row length any contributor has
/// inside those first `rows` rows. Every in-bounds cell is therefore
/// covered by every contributor.
///
pub fn reconciled_shape(matrices: &[RawMatrix]) -> (usize, usize) {
    let rows = matrices.iter().map(|m| m.row_count()).min().unwrap_or(0);
    let cols = matrices
        .iter()
        .filter_map(|m| m.min_row_len(rows))
        .min()
        .unwrap_or(0);
    (rows, cols)
}

///
/// Compute the four per-cell statistic matrices of one bin group.
///
pub fn aggregate_group(bin_id: String, group: BinGroup) -> BinStatistics {
    let (rows, cols) = reconciled_shape(&group.matrices);

    let mut avg = Vec::with_capacity(rows * cols);
    let mut max = Vec::with_capacity(rows * cols);
    let mut min = Vec::with_capacity(rows * cols);
    let mut std = Vec::with_capacity(rows * cols);

    let mut values: Vec<f64> = Vec::with_capacity(group.matrices.len());

    for r in 0..rows {
        for c in 0..cols {
            values.clear();
            values.extend(group.matrices.iter().filter_map(|m| m.get(r, c)));

            // every contributor covers every in-bounds cell by construction
            debug_assert_eq!(values.len(), group.matrices.len());

            let mean = values.iter().sum::<f64>() / values.len() as f64;
            avg.push(mean);
            max.push(values.iter().cloned().fold(f64::MIN, f64::max));
            min.push(values.iter().cloned().fold(f64::MAX, f64::min));
            std.push(sample_std(&values, mean));
        }
    }

    BinStatistics {
        bin_id,
        test_name: group.test_name,
        sample_count: group.matrices.len(),
        shape: (rows, cols),
        avg: StatMatrix::from_flat(rows, cols, avg),
        max: StatMatrix::from_flat(rows, cols, max),
        min: StatMatrix::from_flat(rows, cols, min),
        std: StatMatrix::from_flat(rows, cols, std),
    }
}

/// Sample standard deviation (divisor n-1), defined as 0 for n < 2.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

///
/// Aggregate the whole corpus: group, reconcile, compute, and order the
/// result by [`BinKey`] (numeric identifiers first, then text).
///
pub fn aggregate(records: Vec<RawRecord>) -> Result<CorpusStatistics> {
    if records.is_empty() {
        return Err(StatsError::EmptyCorpus);
    }

    let mut bins: Vec<BinStatistics> = group_records(records)
        .into_iter()
        .map(|(bin_id, group)| aggregate_group(bin_id, group))
        .collect();

    bins.sort_by_key(|b| BinKey::from_id(&b.bin_id));

    Ok(CorpusStatistics { bins })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn record(bin_id: &str, test_name: &str, source: &str, rows: Vec<Vec<f64>>) -> RawRecord {
        RawRecord {
            bin_id: bin_id.to_string(),
            test_name: test_name.to_string(),
            matrix: RawMatrix::new(rows),
            source_id: source.to_string(),
        }
    }

    fn filled(rows: usize, cols: usize, value: f64) -> Vec<Vec<f64>> {
        vec![vec![value; cols]; rows]
    }

    #[rstest]
    fn test_shape_reconciliation() {
        let records = vec![
            record("1", "t", "a", filled(5, 10, 1.0)),
            record("1", "t", "b", filled(5, 8, 2.0)),
            record("1", "t", "c", filled(4, 10, 3.0)),
        ];
        let stats = aggregate(records).unwrap();
        assert_eq!(stats.bins[0].shape, (4, 8));
        assert_eq!(stats.bins[0].sample_count, 3);
    }

    #[rstest]
    fn test_irregular_rows_shrink_cols() {
        // second matrix has a short row inside the working window
        let records = vec![
            record("1", "t", "a", filled(2, 4, 1.0)),
            record("1", "t", "b", vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0]]),
        ];
        let stats = aggregate(records).unwrap();
        assert_eq!(stats.bins[0].shape, (2, 2));
    }

    #[rstest]
    fn test_std_definition() {
        let records = vec![
            record("1", "t", "a", vec![vec![2.0]]),
            record("1", "t", "b", vec![vec![4.0]]),
        ];
        let stats = aggregate(records).unwrap();
        let bin = &stats.bins[0];
        assert_eq!(bin.avg.get(0, 0), Some(3.0));
        assert_eq!(bin.max.get(0, 0), Some(4.0));
        assert_eq!(bin.min.get(0, 0), Some(2.0));
        assert!((bin.std.get(0, 0).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[rstest]
    fn test_single_sample_std_is_zero() {
        let records = vec![record("1", "t", "a", vec![vec![7.0, 8.0]])];
        let stats = aggregate(records).unwrap();
        let bin = &stats.bins[0];
        assert_eq!(bin.std.get(0, 0), Some(0.0));
        assert_eq!(bin.avg.get(0, 1), Some(8.0));
        assert_eq!(bin.max.get(0, 1), Some(8.0));
        assert_eq!(bin.min.get(0, 1), Some(8.0));
    }

    #[rstest]
    fn test_grouping_isolation_and_first_name_wins() {
        let records = vec![
            record("5", "First Name", "a.csv", filled(1, 2, 1.0)),
            record("5", "Second Name", "b.csv", filled(1, 2, 3.0)),
        ];
        let stats = aggregate(records).unwrap();
        assert_eq!(stats.len(), 1);
        let bin = stats.get("5").unwrap();
        assert_eq!(bin.test_name, "First Name");
        assert_eq!(bin.sample_count, 2);
        assert_eq!(bin.avg.get(0, 0), Some(2.0));
    }

    #[rstest]
    fn test_no_key_normalization() {
        let records = vec![
            record("5", "t", "a", filled(1, 1, 1.0)),
            record("05", "t", "b", filled(1, 1, 2.0)),
        ];
        let stats = aggregate(records).unwrap();
        assert_eq!(stats.len(), 2);
        // numeric tie broken by literal text
        assert_eq!(stats.bins[0].bin_id, "05");
        assert_eq!(stats.bins[1].bin_id, "5");
    }

    #[rstest]
    fn test_output_order_numeric_then_text() {
        let records = vec![
            record("FAIL", "t", "a", filled(1, 1, 1.0)),
            record("10", "t", "a", filled(1, 1, 1.0)),
            record("2", "t", "a", filled(1, 1, 1.0)),
        ];
        let stats = aggregate(records).unwrap();
        let ids: Vec<&str> = stats.iter().map(|b| b.bin_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "10", "FAIL"]);
    }

    #[rstest]
    fn test_empty_corpus_is_error() {
        assert!(matches!(aggregate(vec![]), Err(StatsError::EmptyCorpus)));
    }

    #[rstest]
    fn test_cell_coverage_invariant() {
        // wildly disagreeing shapes still aggregate; every in-bounds cell
        // draws a value from every contributor
        let records = vec![
            record("1", "t", "a", vec![vec![1.0], vec![2.0, 3.0], vec![4.0]]),
            record("1", "t", "b", filled(10, 10, 5.0)),
        ];
        let stats = aggregate(records).unwrap();
        let bin = &stats.bins[0];
        assert_eq!(bin.shape, (3, 1));
        assert_eq!(bin.avg.get(0, 0), Some(3.0));
        assert_eq!(bin.avg.get(2, 0), Some(4.5));
    }

    #[rstest]
    fn test_end_to_end_one_differing_cell() {
        let mut a = filled(3, 3, 1.0);
        let mut b = filled(3, 3, 1.0);
        a[1][1] = 9.0;
        b[1][1] = 11.0;
        let records = vec![record("1", "t", "a.csv", a), record("1", "t", "b.csv", b)];
        let stats = aggregate(records).unwrap();
        let bin = &stats.bins[0];

        assert_eq!(bin.avg.get(1, 1), Some(10.0));
        assert_eq!(bin.max.get(1, 1), Some(11.0));
        assert_eq!(bin.min.get(1, 1), Some(9.0));
        assert!((bin.std.get(1, 1).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);

        for r in 0..3 {
            for c in 0..3 {
                if (r, c) != (1, 1) {
                    assert_eq!(bin.std.get(r, c), Some(0.0));
                    assert_eq!(bin.avg.get(r, c), Some(1.0));
                }
            }
        }
    }
}
