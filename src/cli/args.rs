//! Defines the command-line arguments and subcommands for the kata CLI.

use crate::report::ColorMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "kata",
    version,
    about = "Table-driven test reports for coding-exercise solutions."
)]
pub struct KataArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in demonstration suites.
    Demo {
        /// When to colour the report.
        #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
        color: ColorMode,
        /// Show a word diff under each failed case.
        #[arg(long)]
        diff: bool,
        /// Print the reports as JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Also run a suite whose solution is deliberately wrong.
        #[arg(long)]
        include_failing: bool,
    },
    /// List fixture files under a directory with their case counts.
    Fixtures {
        /// The directory to search.
        #[arg(default_value = "tests/fixtures")]
        path: PathBuf,
    },
}
