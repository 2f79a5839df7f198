//! Kata error type.
//!
//! Rendering and comparison never fail; everything here comes from the
//! surroundings of a run: writing the report, reading fixture files and
//! serializing reports.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(kata::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to read fixture file {}", .path.display())]
    #[diagnostic(code(kata::fixture::read))]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML fixture {}", .path.display())]
    #[diagnostic(
        code(kata::fixture::yaml),
        help("fixtures are a list of `{{ input: ..., expected: ... }}` entries")
    )]
    FixtureYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON fixture {}", .path.display())]
    #[diagnostic(
        code(kata::fixture::json),
        help("fixtures are a list of `{{ \"input\": ..., \"expected\": ... }}` objects")
    )]
    FixtureJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported fixture file {}", .path.display())]
    #[diagnostic(
        code(kata::fixture::unsupported),
        help("use a .yaml, .yml or .json extension")
    )]
    UnsupportedFixture { path: PathBuf },

    #[error("Failed to serialize report: {0}")]
    #[diagnostic(code(kata::report::json))]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The fixture file involved in the error, if any.
    pub fn fixture_path(&self) -> Option<&std::path::Path> {
        match self {
            Error::FixtureRead { path, .. }
            | Error::FixtureYaml { path, .. }
            | Error::FixtureJson { path, .. }
            | Error::UnsupportedFixture { path } => Some(path),
            Error::Io(_) | Error::Json(_) => None,
        }
    }
}
