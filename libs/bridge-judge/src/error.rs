//! Failure taxonomy for a single evaluation.
//!
//! None of these ever escape the judge as a fault: every variant is turned
//! into a failed [`Verdict`](crate::types::Verdict) at the checker or
//! dispatcher boundary.

use crate::language::Language;
use thiserror::Error;

pub const UNSUPPORTED_LANGUAGE_OUTPUT: &str = "Unsupported language";
pub const INPUT_PARSE_OUTPUT: &str = "Error parsing input";
pub const EXECUTION_ERROR_OUTPUT: &str = "Execution error";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Declared language matches none of the known tags
    #[error("Language {0} is not supported for validation.")]
    UnsupportedLanguage(String),

    /// Source text lacks the markers its language's screen requires
    #[error("{hint}")]
    MissingStructure {
        language: Language,
        output: &'static str,
        hint: &'static str,
    },

    /// Test input is not a bracketed integer list followed by a target line
    #[error("Invalid test input: {0}")]
    InputParse(String),

    /// Anything else that went wrong while solving
    #[error("{0}")]
    Execution(String),
}

impl EvaluationError {
    /// Fixed label reported in a verdict's `output` field
    pub fn output_label(&self) -> &'static str {
        match self {
            EvaluationError::UnsupportedLanguage(_) => UNSUPPORTED_LANGUAGE_OUTPUT,
            EvaluationError::MissingStructure { output, .. } => *output,
            EvaluationError::InputParse(_) => INPUT_PARSE_OUTPUT,
            EvaluationError::Execution(_) => EXECUTION_ERROR_OUTPUT,
        }
    }

    /// Short machine-friendly name, used as a metrics label
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluationError::UnsupportedLanguage(_) => "unsupported_language",
            EvaluationError::MissingStructure { .. } => "missing_structure",
            EvaluationError::InputParse(_) => "input_parse",
            EvaluationError::Execution(_) => "execution",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_message() {
        let err = EvaluationError::UnsupportedLanguage("ruby".to_string());
        assert_eq!(err.to_string(), "Language ruby is not supported for validation.");
        assert_eq!(err.output_label(), "Unsupported language");
    }

    #[test]
    fn test_missing_structure_uses_hint() {
        let err = EvaluationError::MissingStructure {
            language: Language::Python,
            output: "Compilation error: Missing required function",
            hint: "Your code must define a twoSum or two_sum function.",
        };
        assert_eq!(err.to_string(), "Your code must define a twoSum or two_sum function.");
        assert_eq!(err.output_label(), "Compilation error: Missing required function");
        assert_eq!(err.kind(), "missing_structure");
    }

    #[test]
    fn test_parse_and_execution_labels() {
        assert_eq!(
            EvaluationError::InputParse("x".into()).output_label(),
            "Error parsing input"
        );
        assert_eq!(
            EvaluationError::Execution("boom".into()).output_label(),
            "Execution error"
        );
        assert_eq!(EvaluationError::Execution("boom".into()).to_string(), "boom");
    }
}
