use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::{Encoding, GB18030, GBK, UTF_8, WINDOWS_1252};
use flate2::read::MultiGzDecoder;

use crate::error::{DecodeError, Result};

///
/// Ordered encoding trial list. Malformed sequences are substituted rather
/// than failing an attempt, so an attempt only fails if it can produce no
/// output at all — in practice the first candidate wins, lossily if need
/// be, and mis-encoded input is the user's problem. `UTF_8` goes through
/// BOM sniffing, so BOM-carrying UTF-8 and UTF-16 inputs are honored.
///
pub const ENCODING_CANDIDATES: &[&Encoding] = &[UTF_8, GBK, GB18030, WINDOWS_1252];

///
/// One decoded source: normalized lines plus the name of the encoding that
/// won the trial, kept for presentation layers only.
///
#[derive(Debug, Clone)]
pub struct DecodedSource {
    pub lines: Vec<String>,
    pub encoding: &'static str,
}

///
/// Read a log file into normalized text lines.
///
/// Files ending in `.gz` are gunzipped first. Line endings are normalized
/// so CR, CRLF and LF all split identically; the trailing empty segment
/// after a final newline is kept (blank lines are record boundaries to the
/// parser, so it is inert).
///
/// # Arguments
/// - path: the path to the log file to decode
pub fn read_source_lines<T: AsRef<Path>>(path: T) -> Result<DecodedSource> {
    let path = path.as_ref();
    let bytes = read_source_bytes(path)?;
    Ok(decode_bytes(&bytes))
}

///
/// Decode an in-memory byte source using the encoding trial list.
///
pub fn decode_bytes(bytes: &[u8]) -> DecodedSource {
    let (text, used) = ENCODING_CANDIDATES
        .iter()
        .find_map(|encoding| {
            // substitution is tolerated within an attempt; only a decoder
            // unable to produce output at all would fall through
            let (text, used, _had_errors) = encoding.decode(bytes);
            Some((text, used))
        })
        .unwrap_or_else(|| {
            let (text, used, _) = WINDOWS_1252.decode(bytes);
            (text, used)
        });

    DecodedSource {
        lines: split_lines(&text),
        encoding: used.name(),
    }
}

fn read_source_bytes(path: &Path) -> Result<Vec<u8>> {
    let is_gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    let open = |p: &Path| {
        File::open(p).map_err(|e| DecodeError::Io {
            path: p.display().to_string(),
            source: e,
        })
    };

    let mut bytes = Vec::new();
    if is_gzipped {
        let file = open(path)?;
        MultiGzDecoder::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| DecodeError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
    } else {
        open(path)?
            .read_to_end(&mut bytes)
            .map_err(|e| DecodeError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
    }
    Ok(bytes)
}

fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split('\n').map(|l| l.to_string()).collect()
}
