/// Structural Screen - Lexical Gate in Front of the Reference Solver
///
/// **Core Responsibility:**
/// Decide whether submitted source text has the minimum shape of a Two Sum
/// solution for its language, using plain substring checks.
///
/// **Critical Properties:**
/// - Never parses, compiles or executes the submission
/// - One screen per language, selected by exhaustive match
/// - Markers are matched case-sensitively against the raw source text
///
/// A submission that passes is assumed to be a reasonable attempt; the
/// answer itself always comes from the reference solver.

use crate::error::EvaluationError;
use crate::language::Language;

const MISSING_CLASS_STRUCTURE: &str = "Compilation error: Missing required class structure";
const MISSING_FUNCTION: &str = "Compilation error: Missing required function";

/// How the markers of a screen combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRule {
    /// Every marker must appear
    AllOf(&'static [&'static str]),
    /// At least one marker must appear
    AnyOf(&'static [&'static str]),
}

impl MarkerRule {
    fn is_satisfied_by(&self, source: &str) -> bool {
        match self {
            MarkerRule::AllOf(markers) => markers.iter().all(|m| source.contains(m)),
            MarkerRule::AnyOf(markers) => markers.iter().any(|m| source.contains(m)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralScreen {
    pub language: Language,
    pub rule: MarkerRule,
    /// Reported as the verdict output when the screen rejects
    pub failure_output: &'static str,
    /// Reported as the verdict error when the screen rejects
    pub hint: &'static str,
}

const JAVA: StructuralScreen = StructuralScreen {
    language: Language::Java,
    rule: MarkerRule::AllOf(&["class Solution", "public int[]", "twoSum"]),
    failure_output: MISSING_CLASS_STRUCTURE,
    hint: "Your code must define a Solution class with a twoSum method.",
};

const CPP: StructuralScreen = StructuralScreen {
    language: Language::Cpp,
    rule: MarkerRule::AllOf(&["class Solution", "vector<int>", "twoSum"]),
    failure_output: MISSING_CLASS_STRUCTURE,
    hint: "Your code must define a Solution class with a twoSum method.",
};

const JAVASCRIPT: StructuralScreen = StructuralScreen {
    language: Language::JavaScript,
    rule: MarkerRule::AnyOf(&["function twoSum", "twoSum ="]),
    failure_output: MISSING_FUNCTION,
    hint: "Your code must define a twoSum function.",
};

const PYTHON: StructuralScreen = StructuralScreen {
    language: Language::Python,
    rule: MarkerRule::AnyOf(&["def twoSum", "def two_sum"]),
    failure_output: MISSING_FUNCTION,
    hint: "Your code must define a twoSum or two_sum function.",
};

impl StructuralScreen {
    pub fn for_language(language: Language) -> &'static StructuralScreen {
        match language {
            Language::Java => &JAVA,
            Language::Cpp => &CPP,
            Language::JavaScript => &JAVASCRIPT,
            Language::Python => &PYTHON,
        }
    }

    /// Ok when the source carries the required markers
    pub fn inspect(&self, source: &str) -> Result<(), EvaluationError> {
        if self.rule.is_satisfied_by(source) {
            Ok(())
        } else {
            Err(EvaluationError::MissingStructure {
                language: self.language,
                output: self.failure_output,
                hint: self.hint,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(language: Language, source: &str) -> bool {
        StructuralScreen::for_language(language).inspect(source).is_ok()
    }

    #[test]
    fn test_java_requires_every_marker() {
        let full = "class Solution {\n    public int[] twoSum(int[] nums, int target) {}\n}";
        assert!(passes(Language::Java, full));
        assert!(!passes(Language::Java, "class Solution { public int[] solve() {} }"));
        assert!(!passes(Language::Java, "public int[] twoSum(int[] nums, int target) {}"));
        assert!(!passes(Language::Java, "class Solution { int[] twoSum() {} }"));
    }

    #[test]
    fn test_cpp_requires_every_marker() {
        let full = "class Solution {\npublic:\n    vector<int> twoSum(vector<int>& nums, int target) {}\n};";
        assert!(passes(Language::Cpp, full));
        assert!(!passes(Language::Cpp, "vector<int> twoSum(vector<int>& nums, int target) {}"));
    }

    #[test]
    fn test_javascript_accepts_declaration_or_assignment() {
        assert!(passes(Language::JavaScript, "function twoSum(nums, target) {}"));
        assert!(passes(Language::JavaScript, "const twoSum = (nums, target) => {}"));
        assert!(!passes(Language::JavaScript, "function solve(nums, target) {}"));
        // assignment marker needs the space before '='
        assert!(!passes(Language::JavaScript, "const twoSum=(nums, target) => {}"));
    }

    #[test]
    fn test_python_accepts_both_naming_conventions() {
        assert!(passes(Language::Python, "def twoSum(nums, target):\n    pass"));
        assert!(passes(Language::Python, "def two_sum(nums, target):\n    pass"));
        assert!(!passes(Language::Python, "def solve(nums, target):\n    pass"));
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert!(!passes(Language::Python, "DEF TWOSUM(nums, target):"));
    }

    #[test]
    fn test_rejection_carries_language_labels() {
        let err = StructuralScreen::for_language(Language::Java)
            .inspect("")
            .unwrap_err();
        assert_eq!(err.output_label(), MISSING_CLASS_STRUCTURE);
        assert_eq!(
            err.to_string(),
            "Your code must define a Solution class with a twoSum method."
        );

        let err = StructuralScreen::for_language(Language::JavaScript)
            .inspect("")
            .unwrap_err();
        assert_eq!(err.output_label(), MISSING_FUNCTION);
        assert_eq!(err.to_string(), "Your code must define a twoSum function.");
    }

    #[test]
    fn test_every_language_has_a_screen() {
        for lang in Language::ALL {
            assert_eq!(StructuralScreen::for_language(lang).language, lang);
        }
    }
}
