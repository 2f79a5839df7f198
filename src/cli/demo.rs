//! Built-in suites for `kata demo`.

use crate::error::Result;
use crate::report::TestReport;
use crate::runner::TestRunner;
use std::collections::BTreeMap;
use termcolor::WriteColor;

/// Keeps the largest value seen per key.
#[derive(Debug, Default)]
struct MaxTracker {
    best: BTreeMap<String, i32>,
}

impl MaxTracker {
    fn offer(&mut self, key: &String, value: &i32) -> Option<i32> {
        let entry = self.best.entry(key.clone()).or_insert(*value);
        *entry = (*entry).max(*value);
        Some(*entry)
    }
}

fn first_even(values: &Vec<i32>) -> Option<i32> {
    values.iter().copied().find(|v| v % 2 == 0)
}

fn word_lengths(text: &String) -> BTreeMap<String, usize> {
    text.split_whitespace().map(|w| (w.to_string(), w.len())).collect()
}

/// Runs every demo suite through `runner`, in a fixed order.
pub fn run_demo<W: WriteColor>(runner: &mut TestRunner<W>, include_failing: bool) -> Result<Vec<TestReport>> {
    let mut reports = vec![
        runner.run("square", |x: &i64| x * x, &[(2, 4), (3, 9)])?,
        runner.run("sum", |v: &Vec<i32>| v.iter().sum::<i32>(), &[(vec![1, 2, 3], 6)])?,
        runner.run2("add", |a: &i32, b: &i32| a + b, &[((3, 4), 7)])?,
        runner.run(
            "first even",
            first_even,
            &[(vec![1, 3, 5], None), (vec![1, 4, 6], Some(4))],
        )?,
        runner.run(
            "word lengths",
            word_lengths,
            &[(
                "to be".to_string(),
                BTreeMap::from([("be".to_string(), 2), ("to".to_string(), 2)]),
            )],
        )?,
    ];

    let mut tracker = MaxTracker::default();
    reports.push(runner.run_method(
        "max tracker",
        &mut tracker,
        MaxTracker::offer,
        &[
            (("a".to_string(), 3), Some(3)),
            (("a".to_string(), 1), Some(3)),
            (("b".to_string(), 5), Some(5)),
        ],
    )?);

    let empty: &[(i32, i32)] = &[];
    reports.push(runner.run("empty", |x: &i32| *x, empty)?);

    if include_failing {
        reports.push(runner.run("off by one", |x: &i32| x * 2 + 1, &[(5, 10)])?);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportConfig;
    use termcolor::NoColor;

    #[test]
    fn demo_suites_pass_unless_failing_suite_included() {
        let mut runner = TestRunner::new(NoColor::new(Vec::new()), ReportConfig::plain());
        let reports = run_demo(&mut runner, false).unwrap();
        assert_eq!(reports.len(), 7);
        assert!(reports.iter().all(TestReport::all_passed));

        let reports = run_demo(&mut runner, true).unwrap();
        let last = reports.last().unwrap();
        assert_eq!(last.name, "off by one");
        assert_eq!(last.outcomes[0].output, "11");
        assert!(!last.all_passed());
    }

    #[test]
    fn tracker_keeps_maximum() {
        let mut tracker = MaxTracker::default();
        assert_eq!(tracker.offer(&"k".to_string(), &2), Some(2));
        assert_eq!(tracker.offer(&"k".to_string(), &1), Some(2));
    }
}
