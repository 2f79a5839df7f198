//! Handles user-facing output for the CLI beyond the per-suite reports.
//!
//! The runner prints suite reports itself; this module prints what spans
//! suites: the overall summary, JSON reports and fixture listings.

use crate::error::Result;
use crate::report::{partition_reports, ReportConfig, TestReport};
use std::io::Write;
use std::path::Path;
use termcolor::{ColorSpec, StandardStream, WriteColor};

/// Prints one line totalling every report.
pub fn print_summary(reports: &[TestReport], config: &ReportConfig) -> Result<()> {
    let mut stdout = StandardStream::stdout(config.color.choice());
    let (passed, failed) = partition_reports(reports);
    let color = if failed == 0 {
        config.palette.pass
    } else {
        config.palette.fail
    };
    if config.colors_enabled() {
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    }
    write!(
        stdout,
        "Suites: {}, cases passed {}, failed {}",
        reports.len(),
        passed,
        failed
    )?;
    if config.colors_enabled() {
        stdout.reset()?;
    }
    writeln!(stdout)?;
    Ok(())
}

/// Prints the reports as a pretty JSON array.
pub fn print_json(reports: &[TestReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

/// Prints one fixture file with its case count.
pub fn print_fixture(path: &Path, name: Option<&str>, cases: usize) {
    match name {
        Some(name) => println!("{} ({}): {} cases", path.display(), name, cases),
        None => println!("{}: {} cases", path.display(), cases),
    }
}
