use crate::error::{EvaluationError, EXECUTION_ERROR_OUTPUT, INPUT_PARSE_OUTPUT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source text exactly as the user typed it, plus the declared language tag.
///
/// The tag stays a plain string so an unknown language can still be
/// reported back as a verdict instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub source_code: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: u32,
    /// `"[2,7,11,15]\n9"`
    pub input: String,
    /// `"[0,1]"` or `"[]"`
    pub expected_output: String,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Result of evaluating one submission against one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub input: String,
    pub output: String,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    /// Verdict for a run where no meaningful comparison could be made
    pub fn from_error(input: &str, expected: &str, err: &EvaluationError) -> Self {
        Self {
            passed: false,
            input: input.to_string(),
            output: err.output_label().to_string(),
            expected: expected.to_string(),
            error: Some(err.to_string()),
        }
    }

    /// Verdict for a solver output that was compared against the expectation
    pub fn compared(input: &str, output: String, expected: &str, passed: bool) -> Self {
        Self {
            passed,
            input: input.to_string(),
            output,
            expected: expected.to_string(),
            error: None,
        }
    }
}

/// One verdict tagged with the test case it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub test_id: u32,
    pub is_hidden: bool,
    #[serde(flatten)]
    pub verdict: Verdict,
}

pub const HIDDEN_PLACEHOLDER: &str = "hidden";

impl TestOutcome {
    /// Copy with input, output and expectation masked when the case is hidden.
    ///
    /// Parse and execution error details come from the fixture data, so they are
    /// masked too; structure and language errors only describe the submission.
    pub fn redacted(&self) -> Self {
        if !self.is_hidden {
            return self.clone();
        }
        let error = match self.verdict.output.as_str() {
            INPUT_PARSE_OUTPUT | EXECUTION_ERROR_OUTPUT => self
                .verdict
                .error
                .as_ref()
                .map(|_| HIDDEN_PLACEHOLDER.to_string()),
            _ => self.verdict.error.clone(),
        };
        Self {
            test_id: self.test_id,
            is_hidden: true,
            verdict: Verdict {
                passed: self.verdict.passed,
                input: HIDDEN_PLACEHOLDER.to_string(),
                output: HIDDEN_PLACEHOLDER.to_string(),
                expected: HIDDEN_PLACEHOLDER.to_string(),
                error,
            },
        }
    }
}

/// Aggregate of one submission over a list of test cases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub language: String,
    pub passed: usize,
    pub total: usize,
    pub all_passed: bool,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<TestOutcome>,
}

impl RunSummary {
    /// Same summary with every hidden outcome masked
    pub fn redacted(&self) -> Self {
        Self {
            results: self.results.iter().map(TestOutcome::redacted).collect(),
            ..self.clone()
        }
    }
}
