//! Test reports and reporting configuration.
//!
//! A [`TestReport`] is what a runner hands back after printing: the counts and
//! the rendered fields of every case, in case order. [`ReportConfig`] decides
//! how the printed form looks.

use crate::error::Result;
use difference::{Changeset, Difference};
use serde::{Deserialize, Serialize};
use termcolor::{Color, ColorChoice};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// When to emit colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current stdout.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Colours for the three highlighted parts of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub pass: Color,
    pub fail: Color,
    pub header: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            pass: Color::Green,
            fail: Color::Red,
            header: Color::Cyan,
        }
    }
}

/// Configuration for report output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportConfig {
    pub color: ColorMode,
    pub palette: Palette,
    /// Print a word diff of output against expected under each failed case.
    pub show_diff: bool,
}

impl ReportConfig {
    /// Plain text, no diff. What non-terminal consumers get.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }

    /// Whether colour codes are written; `Auto` resolves against stdout.
    pub fn colors_enabled(&self) -> bool {
        self.color.choice() != ColorChoice::Never
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// The evaluated form of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// 1-based position in the case table.
    pub index: usize,
    pub passed: bool,
    pub input: String,
    pub output: String,
    pub expected: String,
}

impl CaseOutcome {
    pub fn status(&self) -> &'static str {
        if self.passed {
            "PASSED"
        } else {
            "FAILED"
        }
    }

    /// The report line for this case, without colour.
    ///
    /// ```rust
    /// use kata::report::CaseOutcome;
    /// let outcome = CaseOutcome {
    ///     index: 1,
    ///     passed: true,
    ///     input: "2".into(),
    ///     output: "4".into(),
    ///     expected: "4".into(),
    /// };
    /// assert_eq!(outcome.line(), "Test 1: PASSED Input: 2 Output: 4 Expected: 4");
    /// ```
    pub fn line(&self) -> String {
        format!(
            "Test {}: {} Input: {} Output: {} Expected: {}",
            self.index,
            self.status(),
            self.input,
            self.output,
            self.expected
        )
    }

    /// Word diff from the expected text to the output text.
    pub fn diff(&self) -> String {
        mismatch_diff(&self.expected, &self.output)
    }
}

/// Outcome of running one case table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestReport {
    pub name: String,
    pub total: usize,
    pub passed: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl TestReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: CaseOutcome) {
        self.total += 1;
        if outcome.passed {
            self.passed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// True when every case passed; vacuously true for an empty table.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn summary_line(&self) -> String {
        format!("Result: {}/{} tests passed", self.passed, self.total)
    }

    pub fn banner(&self) -> &'static str {
        if self.all_passed() {
            "All tests PASSED! ✓"
        } else {
            "Some tests FAILED! ✗"
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Sums passed and failed counts over several reports.
pub fn partition_reports(reports: &[TestReport]) -> (usize, usize) {
    reports
        .iter()
        .fold((0, 0), |(passed, failed), r| (passed + r.passed, failed + r.failed()))
}

// =============================================================================
// DIFF
// =============================================================================

/// Word-level diff between two rendered values.
///
/// Words only in `expected` appear as `[-word-]`, words only in `actual` as
/// `{+word+}`.
///
/// ```rust
/// assert_eq!(kata::report::mismatch_diff("[1, 2]", "[1, 3]"), "[1, [-2]-] {+3]+}");
/// ```
pub fn mismatch_diff(expected: &str, actual: &str) -> String {
    let changeset = Changeset::new(expected, actual, " ");
    let words: Vec<String> = changeset
        .diffs
        .iter()
        .map(|diff| match diff {
            Difference::Same(x) => x.clone(),
            Difference::Rem(x) => format!("[-{}-]", x),
            Difference::Add(x) => format!("{{+{}+}}", x),
        })
        .collect();
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(index: usize, passed: bool) -> CaseOutcome {
        CaseOutcome {
            index,
            passed,
            input: "5".into(),
            output: if passed { "10".into() } else { "11".into() },
            expected: "10".into(),
        }
    }

    #[test]
    fn record_counts_passes_and_failures() {
        let mut report = TestReport::new("double");
        report.record(outcome(1, true));
        report.record(outcome(2, false));
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.failures().map(|o| o.index).collect::<Vec<_>>(), vec![2]);
        assert_eq!(report.summary_line(), "Result: 1/2 tests passed");
        assert_eq!(report.banner(), "Some tests FAILED! ✗");
    }

    #[test]
    fn empty_report_is_vacuously_passing() {
        let report = TestReport::new("empty");
        assert!(report.all_passed());
        assert_eq!(report.summary_line(), "Result: 0/0 tests passed");
        assert_eq!(report.banner(), "All tests PASSED! ✓");
    }

    #[test]
    fn failed_line_and_diff() {
        let failed = outcome(3, false);
        assert_eq!(failed.line(), "Test 3: FAILED Input: 5 Output: 11 Expected: 10");
        assert_eq!(failed.diff(), "[-10-] {+11+}");
    }

    #[test]
    fn json_round_trip_of_report() {
        let mut report = TestReport::new("json");
        report.record(outcome(1, true));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"name\": \"json\""));
        let back: TestReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn partition_sums_over_reports() {
        let mut a = TestReport::new("a");
        a.record(outcome(1, true));
        let mut b = TestReport::new("b");
        b.record(outcome(1, false));
        b.record(outcome(2, true));
        assert_eq!(partition_reports(&[a, b]), (2, 1));
    }

    #[test]
    fn config_builders() {
        let config = ReportConfig::plain().with_diff(true);
        assert!(!config.colors_enabled());
        assert!(config.show_diff);
        assert_eq!(ColorMode::Never.choice(), ColorChoice::Never);
        assert_eq!(ColorMode::Always.choice(), ColorChoice::Always);
        assert!(ReportConfig::default().with_color(ColorMode::Always).colors_enabled());
        let palette = Palette {
            pass: Color::Yellow,
            ..Palette::default()
        };
        let config = ReportConfig::default().with_palette(palette);
        assert_eq!(config.palette.pass, Color::Yellow);
        assert_eq!(config.palette.fail, Color::Red);
    }

    #[test]
    fn auto_mode_resolves_against_stdout() {
        let tty = atty::is(atty::Stream::Stdout);
        let expected = if tty { ColorChoice::Auto } else { ColorChoice::Never };
        assert_eq!(ColorMode::Auto.choice(), expected);
        assert_eq!(ReportConfig::default().colors_enabled(), tty);
    }
}
