// Language dispatch and per-language acceptance checks

use crate::error::EvaluationError;
use crate::evaluator::outputs_match;
use crate::language::Language;
use crate::screen::StructuralScreen;
use crate::solver;
use crate::types::Verdict;
use tracing::debug;

/// Evaluate a submission against one test case.
///
/// Resolves the declared language, runs that language's acceptance check
/// and returns its verdict unchanged. An unknown language yields a failed
/// verdict with output `"Unsupported language"` and never reaches a check.
///
/// Pure: identical arguments always produce an identical verdict.
pub fn evaluate(
    source_code: &str,
    declared_language: &str,
    input: &str,
    expected_output: &str,
) -> Verdict {
    match declared_language.parse::<Language>() {
        Ok(language) => check(language, source_code, input, expected_output),
        Err(err) => {
            debug!(language = declared_language, "Unsupported language");
            Verdict::from_error(input, expected_output, &err)
        }
    }
}

/// Acceptance check for a known language.
///
/// 1. Structural screen over the raw source (fail fast, solver untouched)
/// 2. Parse the test input and derive the answer with the reference solver
/// 3. Compare the answer to the expectation after normalization
///
/// `output` carries the solver's answer as produced; `expected` is the
/// caller's string untouched.
pub fn check(language: Language, source_code: &str, input: &str, expected_output: &str) -> Verdict {
    match screen_and_solve(language, source_code, input) {
        Ok(output) => {
            let passed = outputs_match(&output, expected_output);
            debug!(language = %language, output = %output, passed, "Submission checked");
            Verdict::compared(input, output, expected_output, passed)
        }
        Err(err) => {
            debug!(language = %language, kind = err.kind(), error = %err, "Submission rejected");
            Verdict::from_error(input, expected_output, &err)
        }
    }
}

fn screen_and_solve(
    language: Language,
    source_code: &str,
    input: &str,
) -> Result<String, EvaluationError> {
    StructuralScreen::for_language(language).inspect(source_code)?;
    solver::solve_input(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAVA_SOLUTION: &str = "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        Map<Integer, Integer> map = new HashMap<>();\n        return new int[] {};\n    }\n}";

    #[test]
    fn test_unsupported_language() {
        let verdict = evaluate("puts 1", "ruby", "[2,7,11,15]\n9", "[0,1]");
        assert!(!verdict.passed);
        assert_eq!(verdict.output, "Unsupported language");
        assert_eq!(verdict.expected, "[0,1]");
        assert_eq!(
            verdict.error.as_deref(),
            Some("Language ruby is not supported for validation.")
        );
    }

    #[test]
    fn test_dispatch_matches_direct_check() {
        let via_dispatch = evaluate(JAVA_SOLUTION, "JAVA", "[3,2,4]\n6", "[1,2]");
        let direct = check(Language::Java, JAVA_SOLUTION, "[3,2,4]\n6", "[1,2]");
        assert_eq!(via_dispatch, direct);
        assert!(direct.passed);
    }

    #[test]
    fn test_structural_gate_skips_solver() {
        // Input is malformed too; the screen must reject before parsing
        let source = "class Solution {\n    public int[] solve(int[] nums, int target) {}\n}";
        let verdict = check(Language::Java, source, "not an input", "[0,1]");
        assert!(!verdict.passed);
        assert_eq!(verdict.output, "Compilation error: Missing required class structure");
        assert_eq!(
            verdict.error.as_deref(),
            Some("Your code must define a Solution class with a twoSum method.")
        );
    }

    #[test]
    fn test_parse_failure_after_screen() {
        let verdict = check(Language::Java, JAVA_SOLUTION, "[2,7,11,15]", "[0,1]");
        assert!(!verdict.passed);
        assert_eq!(verdict.output, "Error parsing input");
        assert!(verdict.error.is_some());
    }

    #[test]
    fn test_overflow_becomes_execution_error() {
        let input = format!("[-1,5]\n{}", i64::MAX);
        let verdict = check(Language::Java, JAVA_SOLUTION, &input, "[]");
        assert!(!verdict.passed);
        assert_eq!(verdict.output, "Execution error");
        assert!(verdict.error.unwrap().contains("overflow"));
    }

    #[test]
    fn test_output_kept_unnormalized() {
        let verdict = check(Language::Java, JAVA_SOLUTION, "[2,7,11,15]\n9", "[0, 1]");
        assert!(verdict.passed);
        assert_eq!(verdict.output, "[0,1]");
        assert_eq!(verdict.expected, "[0, 1]");
        assert_eq!(verdict.input, "[2,7,11,15]\n9");
    }
}
