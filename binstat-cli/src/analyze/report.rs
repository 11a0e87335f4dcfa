use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;

use binstat_core::{BinStatistics, CorpusStatistics, StatMatrix};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

///
/// Render the statistics model to disk. A `.gz` output suffix switches the
/// writer to gzip compression; the format is otherwise unchanged.
///
pub fn write_report<T: AsRef<Path>>(
    statistics: &CorpusStatistics,
    path: T,
    format: ReportFormat,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let is_gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    let mut writer: Box<dyn Write> = if is_gzipped {
        Box::new(GzEncoder::new(BufWriter::new(file), Compression::best()))
    } else {
        Box::new(BufWriter::new(file))
    };

    match format {
        ReportFormat::Csv => write_csv(statistics, &mut writer)?,
        ReportFormat::Json => serde_json::to_writer_pretty(&mut writer, statistics)?,
    }

    writer.flush()?;
    Ok(())
}

///
/// Per bin: four vertically stacked sections (AVG, MAX, MIN, STD), each with
/// a `Row,Col0..ColN` header.
///
fn write_csv(statistics: &CorpusStatistics, writer: &mut impl Write) -> Result<()> {
    for bin in statistics.iter() {
        writeln!(writer, "Bin #{}: {}", bin.bin_id, bin.test_name)?;
        writeln!(writer, "Samples: {}", bin.sample_count)?;
        write_section(writer, bin, "AVG", &bin.avg)?;
        write_section(writer, bin, "MAX", &bin.max)?;
        write_section(writer, bin, "MIN", &bin.min)?;
        write_section(writer, bin, "STD", &bin.std)?;
        writeln!(writer)?;
    }
    Ok(())
}

fn write_section(
    writer: &mut impl Write,
    bin: &BinStatistics,
    label: &str,
    matrix: &StatMatrix,
) -> Result<()> {
    let (rows, cols) = bin.shape;

    writeln!(writer, "===== {} =====", label)?;
    let header: Vec<String> = std::iter::once("Row".to_string())
        .chain((0..cols).map(|c| format!("Col{}", c)))
        .collect();
    writeln!(writer, "{}", header.join(","))?;

    for r in 0..rows {
        let cells: Vec<String> = std::iter::once(r.to_string())
            .chain(matrix.row(r).iter().map(|v| v.to_string()))
            .collect();
        writeln!(writer, "{}", cells.join(","))?;
    }
    Ok(())
}
