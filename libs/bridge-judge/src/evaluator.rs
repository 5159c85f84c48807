/// Test Evaluator - Output Comparison and Run Aggregation
///
/// **Core Responsibility:**
/// Compare solver outputs against expected outputs and fold per-test
/// verdicts into a run summary.
///
/// **Critical Properties:**
/// - Knows nothing about HTTP or the CLI
/// - Knows nothing about individual language screens
/// - Pure function: (submission, test cases) → summary
///
/// **Normalization Rules (Applied to All Languages):**
/// - Remove every whitespace character, including internal ones: YES
/// - Case sensitivity: NO (both sides are lowercased)
/// - Reordering of list elements: NO (`[1,0]` never equals `[0,1]`)

use crate::judge;
use crate::types::{RunSummary, Submission, TestCase, TestOutcome};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

/// Normalize output string for comparison
///
/// Strips all whitespace and lowercases what remains, so `"[0, 1]"` and
/// `"[0,1]"` compare equal, as do `"TRUE"` and `"true"`.
pub fn normalize_output(output: &str) -> String {
    output
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// True when both strings are equal after normalization
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    normalize_output(actual) == normalize_output(expected)
}

fn evaluate_case(submission: &Submission, test_case: &TestCase) -> TestOutcome {
    let verdict = judge::evaluate(
        &submission.source_code,
        &submission.language,
        &test_case.input,
        &test_case.expected_output,
    );

    TestOutcome {
        test_id: test_case.id,
        is_hidden: test_case.is_hidden,
        verdict,
    }
}

/// Evaluate a submission against the first test case only
///
/// Backs the "Run" action: a quick check on the sample input. Returns
/// `None` when there are no test cases at all.
pub fn run_sample(submission: &Submission, test_cases: &[TestCase]) -> Option<TestOutcome> {
    let sample = test_cases.first()?;
    let outcome = evaluate_case(submission, sample);

    debug!(
        language = %submission.language,
        test_id = outcome.test_id,
        passed = outcome.verdict.passed,
        "Sample run evaluated"
    );

    Some(outcome)
}

/// Evaluate a submission against every test case and aggregate
///
/// Each evaluation is independent; results keep the order of `test_cases`.
pub fn run_tests(submission: &Submission, test_cases: &[TestCase]) -> RunSummary {
    let run_id = Uuid::new_v4();
    let mut results = Vec::with_capacity(test_cases.len());

    for test_case in test_cases {
        let outcome = evaluate_case(submission, test_case);

        debug!(
            run_id = %run_id,
            test_id = test_case.id,
            hidden = test_case.is_hidden,
            passed = outcome.verdict.passed,
            error = outcome.verdict.error.as_deref().unwrap_or(""),
            "Test evaluated"
        );

        results.push(outcome);
    }

    let passed = results.iter().filter(|r| r.verdict.passed).count();
    let total = results.len();
    // An empty run has nothing to pass
    let all_passed = total > 0 && passed == total;

    info!(
        run_id = %run_id,
        language = %submission.language,
        passed,
        total,
        "{} of {} tests passed",
        passed,
        total
    );

    RunSummary {
        run_id,
        language: submission.language.clone(),
        passed,
        total,
        all_passed,
        finished_at: Utc::now(),
        results,
    }
}
