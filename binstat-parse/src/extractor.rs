use binstat_core::RawMatrix;

use crate::consts::{COLUMN_HEADER_KEY, TERMINATOR_KEYWORDS};

///
/// Parse the numeric matrix that follows a raw-data marker.
///
/// `start` is the index of the first line after the marker. Returns the
/// extracted matrix together with the index of the line that stopped the
/// extraction, so the caller resumes scanning at that line. The stopping
/// line (blank, or containing a terminator keyword) is never consumed.
///
/// Rows are tolerated, not validated: a line participates only if the text
/// before its first `:` parses as an integer row index, fields that fail
/// float parsing are dropped, and a row left with zero values contributes
/// nothing. Surviving rows may have unequal lengths; reconciling that is the
/// aggregator's job.
///
pub fn extract_matrix(lines: &[String], start: usize) -> (RawMatrix, usize) {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut i = start;

    // optional column-header row, detected by keyword containment
    if i < lines.len() && lines[i].contains(COLUMN_HEADER_KEY) {
        i += 1;
    }

    while i < lines.len() {
        let trimmed = lines[i].trim();

        if trimmed.is_empty() {
            break;
        }
        if TERMINATOR_KEYWORDS.iter().any(|kw| trimmed.contains(kw)) {
            break;
        }

        if let Some(values) = parse_data_row(&lines[i]) {
            rows.push(values);
        }

        i += 1;
    }

    (RawMatrix::new(rows), i)
}

/// Parse one `<index> : <fields>` row; `None` when the line carries no data.
fn parse_data_row(line: &str) -> Option<Vec<f64>> {
    let colon = line.find(':')?;
    let (index_part, rest) = line.split_at(colon);
    let data_part = &rest[1..];

    // the row-index gate: a non-integer prefix means this is not a data row
    index_part.trim().parse::<i64>().ok()?;

    let fields: Vec<&str> = if data_part.contains('\t') {
        data_part.split('\t').collect()
    } else if data_part.contains(',') {
        data_part.split(',').collect()
    } else {
        data_part.split_whitespace().collect()
    };

    let values: Vec<f64> = fields
        .iter()
        .filter_map(|f| f.trim().parse::<f64>().ok())
        .collect();

    if values.is_empty() { None } else { Some(values) }
}
