use clap::{Arg, Command, arg};

use crate::analyze::report::ReportFormat;

pub const ANALYZE_CMD: &str = "analyze";
pub const DEFAULT_OUT: &str = "binstat.csv";
pub const DEFAULT_FORMAT: ReportFormat = ReportFormat::Csv;

pub fn create_analyze_cli() -> Command {
    Command::new(ANALYZE_CMD)
        .about("Parse log files matching a glob (or every *.csv in a directory) and write per-bin cell statistics.")
        .arg(Arg::new("inputs"))
        .arg(arg!(--output <output>).help("Output path; a .gz suffix enables gzip compression"))
        .arg(arg!(--format <format>).help("Report format: csv or json"))
}
