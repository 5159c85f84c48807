use crate::error::EvaluationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the judge knows how to screen.
///
/// Adding a language means adding a variant here; every dispatch site
/// matches exhaustively, so the compiler lists what still needs a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    #[serde(alias = "c++")]
    Cpp,
    #[serde(alias = "js")]
    JavaScript,
    #[serde(alias = "py")]
    Python,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Java,
        Language::Cpp,
        Language::JavaScript,
        Language::Python,
    ];

    /// Canonical lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
            Language::Python => "python",
        }
    }

    /// Every tag accepted for this language, canonical first
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Language::Java => &["java"],
            Language::Cpp => &["cpp", "c++"],
            Language::JavaScript => &["javascript", "js"],
            Language::Python => &["python", "py"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = EvaluationError;

    /// Case-insensitive; accepts the synonyms listed in [`Language::aliases`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.aliases().contains(&tag.as_str()))
            .ok_or_else(|| EvaluationError::UnsupportedLanguage(s.to_string()))
    }
}
