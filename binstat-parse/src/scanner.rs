use crate::consts::{BIN_MARKER, LOOKAHEAD_WINDOW, NAME_MARKER, RAW_DATA_MARKER};

///
/// What became of one candidate record opened by a bin-marker line.
///
#[derive(Debug, PartialEq)]
pub enum ScanOutcome {
    /// A raw-data section was found inside the lookahead window; matrix
    /// extraction starts at `raw_data_idx + 1`.
    RawData {
        bin_id: String,
        test_name: Option<String>,
        raw_data_idx: usize,
    },
    /// Another bin marker appeared first; the candidate is dropped and the
    /// next one starts at `next`.
    AbortAtBin { next: usize },
    /// The window closed with no raw-data section; the candidate is dropped
    /// and scanning resumes at `resume`.
    Exhausted { resume: usize },
}

/// Extract the value following the first colon of a marker line.
pub(crate) fn marker_value(trimmed: &str) -> String {
    trimmed
        .split_once(':')
        .map(|(_, v)| v.trim().to_string())
        .unwrap_or_default()
}

/// Whether a trimmed line opens a bin record.
pub fn is_bin_marker(trimmed: &str) -> bool {
    trimmed.starts_with(BIN_MARKER)
}

///
/// Scan forward from the bin marker at `marker_idx`, looking for the
/// record's raw-data section.
///
/// At most [`LOOKAHEAD_WINDOW`] lines past the marker are examined. A
/// `Name:` line on the way captures the test name; a raw-data marker ends
/// the scan successfully; another bin marker aborts this candidate. Window
/// exhaustion is safe to skip past wholesale: any bin marker inside the
/// window would have hit the abort case, so nothing is lost by resuming
/// after it.
///
pub fn scan_candidate(lines: &[String], marker_idx: usize) -> ScanOutcome {
    let bin_id = marker_value(lines[marker_idx].trim());

    let mut test_name: Option<String> = None;
    let window_end = (marker_idx + LOOKAHEAD_WINDOW).min(lines.len());

    for j in marker_idx + 1..window_end {
        let trimmed = lines[j].trim();

        if trimmed.starts_with(NAME_MARKER) {
            test_name = Some(marker_value(trimmed));
        } else if trimmed == RAW_DATA_MARKER {
            return ScanOutcome::RawData {
                bin_id,
                test_name,
                raw_data_idx: j,
            };
        } else if is_bin_marker(trimmed) {
            return ScanOutcome::AbortAtBin { next: j };
        }
    }

    ScanOutcome::Exhausted { resume: window_end }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn as_lines(text: &str) -> Vec<String> {
        text.split('\n').map(|l| l.to_string()).collect()
    }

    #[rstest]
    fn test_finds_name_and_raw_data() {
        let lines = as_lines("Bin #: 5\nName: Leakage Test\nstuff\nRaw Data:\n0 : 1 2\n");
        let outcome = scan_candidate(&lines, 0);
        assert_eq!(
            outcome,
            ScanOutcome::RawData {
                bin_id: "5".to_string(),
                test_name: Some("Leakage Test".to_string()),
                raw_data_idx: 3,
            }
        );
    }

    #[rstest]
    fn test_missing_name_is_none() {
        let lines = as_lines("Bin #: 5\nRaw Data:\n");
        let outcome = scan_candidate(&lines, 0);
        assert_eq!(
            outcome,
            ScanOutcome::RawData {
                bin_id: "5".to_string(),
                test_name: None,
                raw_data_idx: 1,
            }
        );
    }

    #[rstest]
    fn test_next_bin_marker_aborts_candidate() {
        let lines = as_lines("Bin #: 5\nName: A\nBin #: 6\nRaw Data:\n");
        assert_eq!(scan_candidate(&lines, 0), ScanOutcome::AbortAtBin { next: 2 });
    }

    #[rstest]
    fn test_window_exhaustion_drops_candidate() {
        let mut text = String::from("Bin #: 5\n");
        for _ in 0..400 {
            text.push_str("filler\n");
        }
        text.push_str("Raw Data:\n");
        let lines = as_lines(&text);
        assert_eq!(
            scan_candidate(&lines, 0),
            ScanOutcome::Exhausted { resume: LOOKAHEAD_WINDOW }
        );
    }

    #[rstest]
    fn test_raw_data_must_match_whole_line() {
        // a trailing value disqualifies the raw-data marker
        let lines = as_lines("Bin #: 5\nRaw Data: inline\n");
        assert_eq!(
            scan_candidate(&lines, 0),
            ScanOutcome::Exhausted { resume: lines.len() }
        );
    }
}
