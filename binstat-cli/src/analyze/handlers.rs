use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use binstat_io::LogFileGlob;
use binstat_parse::{parse_corpus_with, source_id_of};
use binstat_stats::aggregate;

use crate::analyze::cli::{DEFAULT_FORMAT, DEFAULT_OUT};
use crate::analyze::report::{ReportFormat, write_report};

pub fn run_analyze(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let inputs = matches
        .get_one::<String>("inputs")
        .expect("A glob pattern or directory of log files is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let format = match matches.get_one::<String>("format") {
        Some(format) => match ReportFormat::from_str(format) {
            Ok(format) => format,
            Err(_err) => anyhow::bail!("Unknown report format supplied: {}", format),
        },
        None => DEFAULT_FORMAT,
    };

    // coerce arguments to types
    let files = LogFileGlob::new(inputs)?;
    if files.is_empty() {
        anyhow::bail!("No log files matched: {}", inputs);
    }
    let total_files = files.len();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Parsing log files...");

    let mut file_num = 0_usize;
    let (all_records, summary) = parse_corpus_with(files, |path, outcome| {
        file_num += 1;
        spinner.set_message(format!(
            "[{}/{}] {}",
            file_num,
            total_files,
            source_id_of(path)
        ));
        if let Err(err) = outcome {
            spinner.println(format!("Skipping {}: {}", source_id_of(path), err));
        }
        spinner.inc(1);
    });
    spinner.finish_and_clear();

    let statistics = aggregate(all_records)?;

    write_report(&statistics, output, format)?;

    println!(
        "Parsed {} files ({} skipped), {} records, {} bins -> {}",
        summary.sources,
        summary.skipped.len(),
        summary.records,
        statistics.len(),
        output
    );

    Ok(())
}
