// Challenge catalog: the practice problems, their starter code and test cases.
// Loaded from challenges.json, or the built-in Two Sum set when no file is configured.

use crate::language::Language;
use crate::solver;
use crate::types::TestCase;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub languages: Vec<Language>,
    /// Keyed by canonical language tag
    #[serde(default)]
    pub starter_code: BTreeMap<String, String>,
    #[serde(default)]
    pub solution_code: BTreeMap<String, String>,
    pub test_cases: Vec<TestCase>,
}

impl Challenge {
    pub fn supports(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    pub fn starter_for(&self, language: Language) -> Option<&str> {
        self.starter_code.get(language.as_str()).map(String::as_str)
    }

    pub fn visible_test_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases.iter().filter(|tc| !tc.is_hidden)
    }

    pub fn hidden_test_count(&self) -> usize {
        self.test_cases.iter().filter(|tc| tc.is_hidden).count()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChallengesJson {
    challenges: Vec<Challenge>,
}

/// Registry of available challenges, in file order
#[derive(Debug, Clone)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    /// Load challenges from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Challenge catalog not found: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let parsed: ChallengesJson =
            serde_json::from_str(content).context("Failed to parse challenges JSON")?;
        Self::new(parsed.challenges)
    }

    /// Build a catalog, rejecting duplicates and fixtures the solver cannot read.
    ///
    /// Code maps may be keyed by any accepted language tag (`"py"`, `"c++"`);
    /// keys are rewritten to the canonical tag so lookups by [`Language`] work.
    pub fn new(mut challenges: Vec<Challenge>) -> Result<Self> {
        if challenges.is_empty() {
            bail!("No challenges configured");
        }

        let mut ids = HashSet::new();
        for challenge in &mut challenges {
            if !ids.insert(challenge.id.clone()) {
                bail!("Duplicate challenge id '{}'", challenge.id);
            }
            if challenge.languages.is_empty() {
                bail!("Challenge '{}' lists no languages", challenge.id);
            }

            let starter = std::mem::take(&mut challenge.starter_code);
            challenge.starter_code =
                canonical_code_map(challenge, starter).context("Invalid starter_code")?;
            let solution = std::mem::take(&mut challenge.solution_code);
            challenge.solution_code =
                canonical_code_map(challenge, solution).context("Invalid solution_code")?;

            let mut test_ids = HashSet::new();
            for tc in &challenge.test_cases {
                if !test_ids.insert(tc.id) {
                    bail!("Challenge '{}' has duplicate test id {}", challenge.id, tc.id);
                }
                solver::parse_test_input(&tc.input).with_context(|| {
                    format!("Challenge '{}' test {} has unreadable input", challenge.id, tc.id)
                })?;
            }
        }

        Ok(Self { challenges })
    }

    /// The Two Sum challenge the practice page ships with
    pub fn builtin() -> Self {
        Self {
            challenges: vec![two_sum()],
        }
    }

    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn list(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

/// Re-key a code map by canonical language tag
fn canonical_code_map(
    challenge: &Challenge,
    code: BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>> {
    let mut canonical = BTreeMap::new();
    for (tag, source) in code {
        let language: Language = tag.parse().with_context(|| {
            format!("Challenge '{}' has code for unknown language '{}'", challenge.id, tag)
        })?;
        if !challenge.supports(language) {
            bail!("Challenge '{}' has code for {} but does not list it", challenge.id, language);
        }
        if canonical.insert(language.as_str().to_string(), source).is_some() {
            bail!("Challenge '{}' has code for {} more than once", challenge.id, language);
        }
    }
    Ok(canonical)
}

fn code_map(entries: [(Language, &str); 4]) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .map(|(lang, code)| (lang.as_str().to_string(), code.to_string()))
        .collect()
}

fn two_sum() -> Challenge {
    Challenge {
        id: "two-sum".to_string(),
        title: "Two Sum".to_string(),
        difficulty: Difficulty::Easy,
        description: "Given an array of integers, return indices of the two numbers such that they add up to a specific target.".to_string(),
        category: "Algorithms".to_string(),
        tags: vec!["array".to_string(), "hash table".to_string()],
        languages: Language::ALL.to_vec(),
        starter_code: code_map([
            (Language::Java, "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        // Your code here\n    }\n}"),
            (Language::Python, "def twoSum(nums, target):\n    # Your code here\n    pass"),
            (Language::Cpp, "class Solution {\npublic:\n    vector<int> twoSum(vector<int>& nums, int target) {\n        // Your code here\n    }\n};"),
            (Language::JavaScript, "function twoSum(nums, target) {\n    // Your code here\n};"),
        ]),
        solution_code: code_map([
            (Language::Java, "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        Map<Integer, Integer> map = new HashMap<>();\n        for (int i = 0; i < nums.length; i++) {\n            int complement = target - nums[i];\n            if (map.containsKey(complement)) {\n                return new int[] { map.get(complement), i };\n            }\n            map.put(nums[i], i);\n        }\n        throw new IllegalArgumentException(\"No two sum solution\");\n    }\n}"),
            (Language::Python, "def twoSum(nums, target):\n    hashmap = {}\n    for i, num in enumerate(nums):\n        complement = target - num\n        if complement in hashmap:\n            return [hashmap[complement], i]\n        hashmap[num] = i\n    return []"),
            (Language::Cpp, "class Solution {\npublic:\n    vector<int> twoSum(vector<int>& nums, int target) {\n        unordered_map<int, int> map;\n        for (int i = 0; i < nums.size(); i++) {\n            int complement = target - nums[i];\n            if (map.find(complement) != map.end()) {\n                return {map[complement], i};\n            }\n            map[nums[i]] = i;\n        }\n        return {};\n    }\n};"),
            (Language::JavaScript, "function twoSum(nums, target) {\n    const map = new Map();\n    for (let i = 0; i < nums.length; i++) {\n        const complement = target - nums[i];\n        if (map.has(complement)) {\n            return [map.get(complement), i];\n        }\n        map.set(nums[i], i);\n    }\n    return [];\n};"),
        ]),
        test_cases: vec![
            TestCase {
                id: 1,
                input: "[2,7,11,15]\n9".to_string(),
                expected_output: "[0,1]".to_string(),
                is_hidden: false,
            },
            TestCase {
                id: 2,
                input: "[3,2,4]\n6".to_string(),
                expected_output: "[1,2]".to_string(),
                is_hidden: false,
            },
            TestCase {
                id: 3,
                input: "[3,3]\n6".to_string(),
                expected_output: "[0,1]".to_string(),
                is_hidden: true,
            },
        ],
    }
}
