//! Table-driven test execution.
//!
//! A [`TestRunner`] invokes a solution once per case, in order, compares the
//! result with the expected value using `PartialEq`, prints one line per case
//! and returns the collected [`TestReport`].
//!
//! Solutions that panic are not caught. The panic leaves the runner and ends
//! the run; every line written before it has already been flushed.
//!
//! # Example Usage
//!
//! ```rust
//! use kata::report::ReportConfig;
//! use kata::runner::TestRunner;
//! use termcolor::NoColor;
//!
//! let mut runner = TestRunner::new(NoColor::new(Vec::new()), ReportConfig::plain());
//! let report = runner
//!     .run("square", |x: &i32| x * x, &[(2, 4), (3, 9)])
//!     .unwrap();
//! assert_eq!(report.passed, 2);
//!
//! let text = String::from_utf8(runner.into_inner().into_inner()).unwrap();
//! assert!(text.contains("Test 2: PASSED Input: 3 Output: 9 Expected: 9"));
//! ```

use crate::error::Result;
use crate::render::{Render, Shape};
use crate::report::{CaseOutcome, ReportConfig, TestReport};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Rule printed above and below the case lines.
pub const SEPARATOR: &str = "--------------------------------------------------------------------";

// =============================================================================
// RUNNER
// =============================================================================

/// Runs case tables against solutions and writes reports to `W`.
pub struct TestRunner<W: WriteColor = StandardStream> {
    out: W,
    config: ReportConfig,
}

impl TestRunner<StandardStream> {
    /// A runner printing to stdout, coloured according to `config`.
    pub fn stdout(config: ReportConfig) -> Self {
        let out = StandardStream::stdout(config.color.choice());
        Self { out, config }
    }
}

impl Default for TestRunner<StandardStream> {
    fn default() -> Self {
        Self::stdout(ReportConfig::default())
    }
}

impl<W: WriteColor> TestRunner<W> {
    pub fn new(out: W, config: ReportConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs a one-argument solution over `cases`.
    pub fn run<I, O, F>(&mut self, name: &str, mut solution: F, cases: &[(I, O)]) -> Result<TestReport>
    where
        I: Render,
        O: Render + PartialEq,
        F: FnMut(&I) -> O,
    {
        let evaluations = cases
            .iter()
            .map(|(input, expected)| (input.render(), solution(input), expected));
        self.execute(name, evaluations)
    }

    /// Runs a two-argument solution; inputs are reported as `[a, b]`.
    pub fn run2<A, B, O, F>(
        &mut self,
        name: &str,
        mut solution: F,
        cases: &[((A, B), O)],
    ) -> Result<TestReport>
    where
        A: Render,
        B: Render,
        O: Render + PartialEq,
        F: FnMut(&A, &B) -> O,
    {
        let evaluations = cases
            .iter()
            .map(|((a, b), expected)| (argument_list(a, b), solution(a, b), expected));
        self.execute(name, evaluations)
    }

    /// Runs a method of `receiver` over `cases`.
    ///
    /// The receiver is shared by all cases, so state left behind by one call
    /// is seen by the next. Method paths such as `Stack::push_pop` fit `method`
    /// directly.
    pub fn run_method<S, A, B, O, F>(
        &mut self,
        name: &str,
        receiver: &mut S,
        mut method: F,
        cases: &[((A, B), O)],
    ) -> Result<TestReport>
    where
        A: Render,
        B: Render,
        O: Render + PartialEq,
        F: FnMut(&mut S, &A, &B) -> O,
    {
        let evaluations = cases.iter().map(|((a, b), expected)| {
            let output = method(&mut *receiver, a, b);
            (argument_list(a, b), output, expected)
        });
        self.execute(name, evaluations)
    }

    // -------------------------------------------------------------------------
    // Execution
    // -------------------------------------------------------------------------

    /// Drives the evaluations lazily so each solution call happens right
    /// before its line is written.
    fn execute<'c, O, It>(&mut self, name: &str, evaluations: It) -> Result<TestReport>
    where
        O: Render + PartialEq + 'c,
        It: Iterator<Item = (String, O, &'c O)>,
    {
        self.write_header(name)?;
        let mut report = TestReport::new(name);
        for (input, output, expected) in evaluations {
            let outcome = CaseOutcome {
                index: report.total + 1,
                passed: output == *expected,
                input,
                output: output.render(),
                expected: expected.render(),
            };
            self.write_outcome(&outcome)?;
            report.record(outcome);
        }
        self.write_footer(&report)?;
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    fn write_header(&mut self, name: &str) -> Result<()> {
        writeln!(self.out)?;
        let header = self.config.palette.header;
        self.write_colored(header, &format!("Testing {}:", name))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", SEPARATOR)?;
        self.out.flush()?;
        Ok(())
    }

    fn write_outcome(&mut self, outcome: &CaseOutcome) -> Result<()> {
        write!(self.out, "Test {}: ", outcome.index)?;
        let color = if outcome.passed {
            self.config.palette.pass
        } else {
            self.config.palette.fail
        };
        self.write_colored(color, outcome.status())?;
        writeln!(
            self.out,
            " Input: {} Output: {} Expected: {}",
            outcome.input, outcome.output, outcome.expected
        )?;
        if self.config.show_diff && !outcome.passed {
            writeln!(self.out, "  Diff: {}", outcome.diff())?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_footer(&mut self, report: &TestReport) -> Result<()> {
        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "{}", report.summary_line())?;
        let color = if report.all_passed() {
            self.config.palette.pass
        } else {
            self.config.palette.fail
        };
        self.write_colored(color, report.banner())?;
        writeln!(self.out)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn write_colored(&mut self, color: Color, text: &str) -> Result<()> {
        let colored = self.config.colors_enabled();
        if colored {
            self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        }
        write!(self.out, "{}", text)?;
        if colored {
            self.out.reset()?;
        }
        Ok(())
    }
}

fn argument_list<A: Render, B: Render>(a: &A, b: &B) -> String {
    Shape::Sequence(vec![a.shape(), b.shape()]).to_string()
}

// =============================================================================
// STDOUT SHORTHANDS
// =============================================================================

/// Runs a one-argument solution and prints the report to stdout.
///
/// ```rust,no_run
/// let report = kata::test_solution("sum", |v: &Vec<i32>| v.iter().sum::<i32>(), &[(vec![1, 2, 3], 6)])
///     .unwrap();
/// assert!(report.all_passed());
/// ```
pub fn test_solution<I, O, F>(name: &str, solution: F, cases: &[(I, O)]) -> Result<TestReport>
where
    I: Render,
    O: Render + PartialEq,
    F: FnMut(&I) -> O,
{
    TestRunner::<StandardStream>::default().run(name, solution, cases)
}

/// Runs a two-argument solution and prints the report to stdout.
pub fn test_solution2<A, B, O, F>(name: &str, solution: F, cases: &[((A, B), O)]) -> Result<TestReport>
where
    A: Render,
    B: Render,
    O: Render + PartialEq,
    F: FnMut(&A, &B) -> O,
{
    TestRunner::<StandardStream>::default().run2(name, solution, cases)
}

/// Runs a method of `receiver` and prints the report to stdout.
pub fn test_class_method<S, A, B, O, F>(
    name: &str,
    receiver: &mut S,
    method: F,
    cases: &[((A, B), O)],
) -> Result<TestReport>
where
    A: Render,
    B: Render,
    O: Render + PartialEq,
    F: FnMut(&mut S, &A, &B) -> O,
{
    TestRunner::<StandardStream>::default().run_method(name, receiver, method, cases)
}
