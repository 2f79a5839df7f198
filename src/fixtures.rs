//! Case tables stored in YAML or JSON files.
//!
//! A fixture file holds either a bare list of cases or a named suite:
//!
//! ```yaml
//! name: two sum
//! cases:
//!   - input: [[2, 7, 11, 15], 9]
//!     expected: [0, 1]
//!   - input: [[3, 3], 6]
//!     expected: [0, 1]
//! ```
//!
//! Two-argument inputs are written as two-element lists and load into
//! `(A, B)` tuples, ready for [`TestRunner::run2`](crate::runner::TestRunner::run2).

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// =============================================================================
// CORE TYPES
// =============================================================================

/// One `(input, expected)` entry as written in a fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase<I, O> {
    pub input: I,
    pub expected: O,
}

/// A loaded case table.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture<I, O> {
    /// Suite name from the file, if it declared one.
    pub name: Option<String>,
    pub cases: Vec<(I, O)>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureDocument<I, O> {
    Cases(Vec<FixtureCase<I, O>>),
    Suite {
        #[serde(default)]
        name: Option<String>,
        cases: Vec<FixtureCase<I, O>>,
    },
}

impl<I, O> From<FixtureDocument<I, O>> for Fixture<I, O> {
    fn from(doc: FixtureDocument<I, O>) -> Self {
        let (name, cases) = match doc {
            FixtureDocument::Suite { name, cases } => (name, cases),
            FixtureDocument::Cases(cases) => (None, cases),
        };
        Fixture {
            name,
            cases: cases.into_iter().map(|c| (c.input, c.expected)).collect(),
        }
    }
}

/// Fixture file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Yaml,
    Json,
}

impl FixtureFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(FixtureFormat::Yaml),
            "json" => Some(FixtureFormat::Json),
            _ => None,
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Parses fixture text. `origin` only labels errors.
pub fn parse_fixture<I, O>(content: &str, format: FixtureFormat, origin: &Path) -> Result<Fixture<I, O>>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
{
    let doc: FixtureDocument<I, O> = match format {
        FixtureFormat::Yaml => serde_yaml::from_str(content).map_err(|source| Error::FixtureYaml {
            path: origin.to_path_buf(),
            source,
        })?,
        FixtureFormat::Json => serde_json::from_str(content).map_err(|source| Error::FixtureJson {
            path: origin.to_path_buf(),
            source,
        })?,
    };
    Ok(doc.into())
}

/// Reads and parses a fixture file.
pub fn load_fixture<I, O>(path: &Path) -> Result<Fixture<I, O>>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
{
    let format = FixtureFormat::from_path(path).ok_or_else(|| Error::UnsupportedFixture {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| Error::FixtureRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&content, format, path)
}

/// Reads only the cases of a fixture file, in file order.
pub fn load_cases<I, O>(path: &Path) -> Result<Vec<(I, O)>>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
{
    Ok(load_fixture(path)?.cases)
}

/// Discovers all fixture files recursively under `root`, sorted by path.
pub fn discover_fixture_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && FixtureFormat::from_path(e.path()).is_some())
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> PathBuf {
        PathBuf::from("inline.yaml")
    }

    #[test]
    fn bare_yaml_list() {
        let yaml = "- input: 2\n  expected: 4\n- input: 3\n  expected: 9\n";
        let fixture: Fixture<i32, i32> = parse_fixture(yaml, FixtureFormat::Yaml, &origin()).unwrap();
        assert_eq!(fixture.name, None);
        assert_eq!(fixture.cases, vec![(2, 4), (3, 9)]);
    }

    #[test]
    fn named_suite_with_pair_inputs() {
        let yaml = "name: add\ncases:\n  - input: [3, 4]\n    expected: 7\n";
        let fixture: Fixture<(i32, i32), i32> =
            parse_fixture(yaml, FixtureFormat::Yaml, &origin()).unwrap();
        assert_eq!(fixture.name.as_deref(), Some("add"));
        assert_eq!(fixture.cases, vec![((3, 4), 7)]);
    }

    #[test]
    fn json_with_optional_expectations() {
        let json = r#"[{"input": [1, 3], "expected": null}, {"input": [2], "expected": 2}]"#;
        let fixture: Fixture<Vec<i32>, Option<i32>> =
            parse_fixture(json, FixtureFormat::Json, Path::new("inline.json")).unwrap();
        assert_eq!(fixture.cases, vec![(vec![1, 3], None), (vec![2], Some(2))]);
    }

    #[test]
    fn malformed_yaml_names_the_file() {
        let err = parse_fixture::<i32, i32>("- input: [", FixtureFormat::Yaml, &origin()).unwrap_err();
        assert!(matches!(err, Error::FixtureYaml { .. }));
        assert_eq!(err.fixture_path(), Some(Path::new("inline.yaml")));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(FixtureFormat::from_path(Path::new("a/b.yml")), Some(FixtureFormat::Yaml));
        assert_eq!(FixtureFormat::from_path(Path::new("c.json")), Some(FixtureFormat::Json));
        assert_eq!(FixtureFormat::from_path(Path::new("d.toml")), None);
        assert_eq!(FixtureFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load_fixture::<i32, i32>(Path::new("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFixture { .. }));
    }
}
