//! # Kata
//!
//! Value rendering and table-driven test reporting for small coding-exercise
//! solutions.
//!
//! ```rust,no_run
//! kata::test_solution("square", |x: &i32| x * x, &[(2, 4), (3, 9)]).unwrap();
//! kata::test_solution2("add", |a: &i32, b: &i32| a + b, &[((3, 4), 7)]).unwrap();
//! ```

pub use crate::error::{Error, Result};
pub use crate::render::{render, Render, Shape};
pub use crate::report::{CaseOutcome, ColorMode, ReportConfig, TestReport};
pub use crate::runner::{test_class_method, test_solution, test_solution2, TestRunner};

pub mod cli;
pub mod error;
pub mod fixtures;
pub mod render;
pub mod report;
pub mod runner;
