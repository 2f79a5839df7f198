//! The kata command-line interface.
//!
//! A thin front end over the library: `demo` runs the built-in suites and
//! `fixtures` lists the fixture files it can find.

use crate::cli::args::{Command, KataArgs};
use crate::error::Result;
use crate::fixtures::{discover_fixture_files, load_fixture, Fixture};
use crate::report::{ColorMode, ReportConfig};
use crate::runner::TestRunner;
use clap::Parser;
use std::io;
use std::path::Path;
use std::process;
use termcolor::NoColor;

pub mod args;
pub mod demo;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = KataArgs::parse();

    let result = match args.command {
        Command::Demo {
            color,
            diff,
            json,
            include_failing,
        } => handle_demo(color, diff, json, include_failing),
        Command::Fixtures { path } => handle_fixtures(&path).map(|_| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(1);
        }
    }
}

/// Handles the `demo` subcommand. Returns whether every suite passed.
fn handle_demo(color: ColorMode, diff: bool, json: bool, include_failing: bool) -> Result<bool> {
    let config = ReportConfig::default().with_color(color).with_diff(diff);

    let reports = if json {
        let mut runner = TestRunner::new(NoColor::new(io::sink()), ReportConfig::plain());
        let reports = demo::run_demo(&mut runner, include_failing)?;
        output::print_json(&reports)?;
        reports
    } else {
        let mut runner = TestRunner::stdout(config.clone());
        let reports = demo::run_demo(&mut runner, include_failing)?;
        output::print_summary(&reports, &config)?;
        reports
    };

    Ok(reports.iter().all(|r| r.all_passed()))
}

/// Handles the `fixtures` subcommand.
fn handle_fixtures(root: &Path) -> Result<()> {
    for path in discover_fixture_files(root) {
        let fixture: Fixture<serde_json::Value, serde_json::Value> = load_fixture(&path)?;
        output::print_fixture(&path, fixture.name.as_deref(), fixture.cases.len());
    }
    Ok(())
}
