///
/// RawMatrix, the numeric table extracted from one raw-data section.
///
/// Rows are kept exactly as parsed: every row is non-empty, but rows of one
/// matrix may have different lengths. Rectangularization happens later, in
/// the aggregation step, never here.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawMatrix {
    pub rows: Vec<Vec<f64>>,
}

impl RawMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        RawMatrix { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Minimum row length among the first `limit` rows.
    ///
    /// Used by the aggregator to derive the working column count of a bin
    /// group; `None` when the matrix has no rows inside the limit.
    ///
    pub fn min_row_len(&self, limit: usize) -> Option<usize> {
        self.rows.iter().take(limit).map(|row| row.len()).min()
    }

    ///
    /// Value at `(row, col)`, if that row exists and is long enough.
    ///
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl From<Vec<Vec<f64>>> for RawMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        RawMatrix::new(rows)
    }
}

///
/// Dense row-major matrix holding one statistic (avg, max, min or std) for
/// every cell of a bin group's reconciled shape.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl StatMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    ///
    /// Build from row-major data; `data` must hold exactly `rows * cols`
    /// values.
    ///
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), String> {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            Ok(())
        } else {
            Err(format!("Index out of bounds: row {}, col {}", row, col))
        }
    }

    ///
    /// One row of the matrix as a slice, for report writers.
    ///
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}
