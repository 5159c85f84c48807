//! Campus Bridge challenge judge.
//!
//! Decides whether a submission "looks like" a Two Sum solution for its
//! declared language, then derives the correct answer with a trusted
//! reference solver and compares it to the expected output. Nothing is
//! compiled or executed.

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod judge;
pub mod language;
pub mod screen;
pub mod solver;
pub mod types;


pub use error::EvaluationError;
pub use evaluator::{normalize_output, outputs_match, run_sample, run_tests};
pub use judge::{check, evaluate};
pub use language::Language;
pub use types::{RunSummary, Submission, TestCase, TestOutcome, Verdict};
