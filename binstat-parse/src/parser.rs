use std::path::{Path, PathBuf};

use binstat_core::{RawRecord, UNKNOWN_TEST_NAME};
use binstat_io::{DecodeError, read_source_lines};

use crate::extractor::extract_matrix;
use crate::scanner::{ScanOutcome, is_bin_marker, scan_candidate};

///
/// Structured counters for one parse run, in place of inline progress
/// narration: presentation layers decide how (and whether) to render these.
///
#[derive(Debug, Clone, Default)]
pub struct CorpusSummary {
    /// Sources successfully decoded and scanned.
    pub sources: usize,
    /// Sources skipped because they could not be decoded.
    pub skipped: Vec<String>,
    /// RawRecords emitted across all sources.
    pub records: usize,
}

impl CorpusSummary {
    pub fn record_source(&mut self, records_found: usize) {
        self.sources += 1;
        self.records += records_found;
    }

    pub fn record_skip(&mut self, source_id: String) {
        self.skipped.push(source_id);
    }
}

///
/// Scan one decoded source, emitting a [`RawRecord`] for every bin record
/// whose raw-data section yields a non-empty matrix.
///
pub fn parse_source(lines: &[String], source_id: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_bin_marker(lines[i].trim()) {
            i += 1;
            continue;
        }

        match scan_candidate(lines, i) {
            ScanOutcome::RawData {
                bin_id,
                test_name,
                raw_data_idx,
            } => {
                let (matrix, stop) = extract_matrix(lines, raw_data_idx + 1);
                if !matrix.is_empty() {
                    records.push(RawRecord {
                        bin_id,
                        test_name: test_name
                            .unwrap_or_else(|| UNKNOWN_TEST_NAME.to_string()),
                        matrix,
                        source_id: source_id.to_string(),
                    });
                }
                // the stopping line may itself open the next bin record
                i = stop;
            }
            ScanOutcome::AbortAtBin { next } => i = next,
            ScanOutcome::Exhausted { resume } => i = resume,
        }
    }

    records
}

///
/// Decode and scan one log file.
///
pub fn parse_file<T: AsRef<Path>>(path: T) -> Result<Vec<RawRecord>, DecodeError> {
    let path = path.as_ref();
    let decoded = read_source_lines(path)?;
    Ok(parse_source(&decoded.lines, &source_id_of(path)))
}

///
/// Parse every file in order, skipping (and counting) sources that fail to
/// decode. A failing source contributes zero records; nothing partial leaks
/// into the output.
///
pub fn parse_corpus(
    files: impl IntoIterator<Item = PathBuf>,
) -> (Vec<RawRecord>, CorpusSummary) {
    parse_corpus_with(files, |_, _| {})
}

///
/// [`parse_corpus`] with a per-source observer: after each file, the
/// callback receives the path and either the number of records it yielded
/// or the decode error that skipped it. Presentation layers hang progress
/// reporting off this instead of re-implementing the corpus loop.
///
pub fn parse_corpus_with(
    files: impl IntoIterator<Item = PathBuf>,
    mut on_source: impl FnMut(&Path, Result<usize, &DecodeError>),
) -> (Vec<RawRecord>, CorpusSummary) {
    let mut all_records = Vec::new();
    let mut summary = CorpusSummary::default();

    for file in files {
        match parse_file(&file) {
            Ok(records) => {
                on_source(&file, Ok(records.len()));
                summary.record_source(records.len());
                all_records.extend(records);
            }
            Err(err) => {
                on_source(&file, Err(&err));
                summary.record_skip(source_id_of(&file));
            }
        }
    }

    (all_records, summary)
}

/// File name component of a path, used as the record's source identifier.
pub fn source_id_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
