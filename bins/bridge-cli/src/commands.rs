// CLI commands for judging submissions locally
use anyhow::{bail, Context, Result};
use bridge_judge::catalog::ChallengeCatalog;
use bridge_judge::config::Settings;
use bridge_judge::{evaluate, run_tests, Language, RunSummary, Submission, Verdict};
use std::fs;
use std::path::Path;

/// Turn a typed `\n` escape into a real newline so fixtures fit on one line
pub fn unescape_input(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

/// Catalog from `--catalog`, else from the environment settings
pub fn load_catalog(catalog: Option<&Path>) -> Result<ChallengeCatalog> {
    match catalog {
        Some(path) => ChallengeCatalog::load(path),
        None => Settings::from_env()?.load_catalog(),
    }
}

/// Multi-line report for a single verdict
pub fn format_verdict(verdict: &Verdict) -> String {
    let mut report = String::new();
    report.push_str(&format!("Input:\n{}\n", verdict.input));
    report.push_str(&format!("Your Output: {}\n", verdict.output));
    report.push_str(&format!("Expected:    {}\n", verdict.expected));
    if let Some(error) = &verdict.error {
        report.push_str(&format!("Error: {}\n", error));
    }
    report.push_str(if verdict.passed {
        "✅ Your solution is correct!"
    } else {
        "❌ Your solution is incorrect."
    });
    report
}

/// Judge a source file against one inline test case; returns whether it passed
pub fn evaluate_file(file: &Path, language: &str, input: &str, expected: &str) -> Result<bool> {
    let source = read_source(file)?;
    let input = unescape_input(input);

    println!("🔍 Judging {} as {}", file.display(), language);
    let verdict = evaluate(&source, language, &input, expected);
    println!("\n{}", format_verdict(&verdict));

    Ok(verdict.passed)
}

fn print_summary(summary: &RunSummary) {
    println!("\n📋 Test Results:\n");
    for outcome in &summary.results {
        let mark = if outcome.verdict.passed { "✅" } else { "❌" };
        let label = if outcome.is_hidden { " (hidden)" } else { "" };
        println!("{} Test {}{}", mark, outcome.test_id, label);
        if !outcome.is_hidden {
            println!("    Input:    {}", outcome.verdict.input.replace('\n', " | "));
            println!("    Output:   {}", outcome.verdict.output);
            println!("    Expected: {}", outcome.verdict.expected);
        }
        if let Some(error) = &outcome.verdict.error {
            println!("    Error:    {}", error);
        }
    }

    println!("\n{} of {} tests passed", summary.passed, summary.total);
    if summary.all_passed {
        println!("🎉 Great job! All tests passed.");
    } else {
        println!("⚠️  Some tests failed. Check the results for details.");
    }
}

/// Run summary as pretty JSON, with hidden cases masked
pub fn summary_json(summary: &RunSummary) -> Result<String> {
    serde_json::to_string_pretty(&summary.redacted()).context("Failed to serialize run summary")
}

/// Judge a source file against every test case of a challenge
pub fn test_file(
    file: &Path,
    language: &str,
    challenge_id: &str,
    catalog: Option<&Path>,
    json: bool,
) -> Result<bool> {
    let catalog = load_catalog(catalog)?;
    let challenge = catalog
        .get(challenge_id)
        .ok_or_else(|| anyhow::anyhow!("Challenge '{}' not found", challenge_id))?;
    let source = read_source(file)?;

    let submission = Submission {
        source_code: source,
        language: language.to_string(),
    };
    let summary = run_tests(&submission, &challenge.test_cases);

    if json {
        println!("{}", summary_json(&summary)?);
    } else {
        println!("🚀 Running {} test(s) for '{}'", summary.total, challenge.title);
        print_summary(&summary);
    }

    Ok(summary.all_passed)
}

/// List the challenges in the catalog
pub fn list_challenges(catalog: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    println!("📋 Available Challenges:\n");
    println!("{:<16} {:<24} {:<8} {:<8}", "Id", "Title", "Level", "Tests");
    println!("{}", "─".repeat(60));

    for challenge in catalog.list() {
        println!(
            "{:<16} {:<24} {:<8} {:<8}",
            challenge.id,
            challenge.title,
            challenge.difficulty.to_string(),
            challenge.test_cases.len()
        );
    }

    println!("\n✅ Total: {} challenge(s)", catalog.len());
    Ok(())
}

/// Starter code for one challenge in one language
pub fn starter_code(challenge_id: &str, language: &str, catalog: Option<&Path>) -> Result<String> {
    let catalog = load_catalog(catalog)?;
    let challenge = catalog
        .get(challenge_id)
        .ok_or_else(|| anyhow::anyhow!("Challenge '{}' not found", challenge_id))?;
    let language: Language = language.parse()?;

    match challenge.starter_for(language) {
        Some(code) => Ok(code.to_string()),
        None => bail!("Challenge '{}' has no starter code for {}", challenge_id, language),
    }
}
