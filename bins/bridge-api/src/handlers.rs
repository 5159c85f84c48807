// HTTP route handlers for the Campus Bridge judge API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bridge_judge::catalog::{Challenge, Difficulty};
use bridge_judge::{evaluate, run_sample, run_tests, Language, Submission, TestCase};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::metrics;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub source_code: String,
    pub language: String,
    pub input: String,
    pub expected_output: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub source_code: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct ChallengeSummary {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub languages: Vec<Language>,
}

/// What a student may see before solving: no solutions, no hidden fixtures
#[derive(Debug, Serialize)]
pub struct ChallengeView {
    #[serde(flatten)]
    pub summary: ChallengeSummary,
    pub description: String,
    pub starter_code: BTreeMap<String, String>,
    pub test_cases: Vec<TestCase>,
    pub hidden_test_count: usize,
}

impl From<&Challenge> for ChallengeSummary {
    fn from(challenge: &Challenge) -> Self {
        Self {
            id: challenge.id.clone(),
            title: challenge.title.clone(),
            difficulty: challenge.difficulty,
            category: challenge.category.clone(),
            tags: challenge.tags.clone(),
            languages: challenge.languages.clone(),
        }
    }
}

impl From<&Challenge> for ChallengeView {
    fn from(challenge: &Challenge) -> Self {
        Self {
            summary: ChallengeSummary::from(challenge),
            description: challenge.description.clone(),
            starter_code: challenge.starter_code.clone(),
            test_cases: challenge.visible_test_cases().cloned().collect(),
            hidden_test_count: challenge.hidden_test_count(),
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Resolve the challenge and make sure it accepts the declared language.
///
/// Unknown language tags are let through on purpose: the judge reports
/// them as an "Unsupported language" verdict.
fn resolve_challenge<'a>(
    state: &'a AppState,
    challenge_id: &str,
    language: &str,
) -> Result<&'a Challenge, Response> {
    let challenge = state.catalog.get(challenge_id).ok_or_else(|| {
        error_response(
            StatusCode::NOT_FOUND,
            format!("Challenge '{}' not found", challenge_id),
        )
    })?;

    if let Ok(lang) = language.parse::<Language>() {
        if !challenge.supports(lang) {
            return Err(error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Challenge '{}' does not accept {}", challenge_id, lang),
            ));
        }
    }

    Ok(challenge)
}

/// GET /status - Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /challenges - List available challenges
pub async fn list_challenges(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let summaries: Vec<ChallengeSummary> = state
        .catalog
        .list()
        .iter()
        .map(ChallengeSummary::from)
        .collect();
    Json(summaries)
}

/// GET /challenges/{id} - Public view of one challenge
pub async fn get_challenge(
    State(state): State<Arc<AppState>>,
    Path(challenge_id): Path<String>,
) -> Response {
    match state.catalog.get(&challenge_id) {
        Some(challenge) => Json(ChallengeView::from(challenge)).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("Challenge '{}' not found", challenge_id),
        ),
    }
}

/// POST /evaluate - Judge one submission against one raw test case
pub async fn evaluate_submission(Json(payload): Json<EvaluateRequest>) -> impl IntoResponse {
    metrics::record_run("evaluate");

    let verdict = evaluate(
        &payload.source_code,
        &payload.language,
        &payload.input,
        &payload.expected_output,
    );
    metrics::record_verdict(&payload.language, &verdict);

    info!(
        language = %payload.language,
        passed = verdict.passed,
        source_size = payload.source_code.len(),
        "Submission evaluated"
    );

    Json(verdict)
}

/// POST /challenges/{id}/run - "Run": judge against the sample test case
pub async fn run_challenge(
    State(state): State<Arc<AppState>>,
    Path(challenge_id): Path<String>,
    Json(payload): Json<SubmissionRequest>,
) -> Response {
    let challenge = match resolve_challenge(&state, &challenge_id, &payload.language) {
        Ok(challenge) => challenge,
        Err(response) => return response,
    };
    metrics::record_run("run");

    let submission = Submission {
        source_code: payload.source_code,
        language: payload.language,
    };

    match run_sample(&submission, &challenge.test_cases) {
        Some(outcome) => {
            metrics::record_verdict(&submission.language, &outcome.verdict);
            info!(
                challenge_id = %challenge_id,
                language = %submission.language,
                passed = outcome.verdict.passed,
                "Sample run completed"
            );
            Json(outcome.redacted()).into_response()
        }
        None => {
            warn!(challenge_id = %challenge_id, "Challenge has no test cases");
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Challenge '{}' has no test cases", challenge_id),
            )
        }
    }
}

/// POST /challenges/{id}/submit - "Run Tests": judge against every test case
pub async fn submit_challenge(
    State(state): State<Arc<AppState>>,
    Path(challenge_id): Path<String>,
    Json(payload): Json<SubmissionRequest>,
) -> Response {
    let challenge = match resolve_challenge(&state, &challenge_id, &payload.language) {
        Ok(challenge) => challenge,
        Err(response) => return response,
    };
    metrics::record_run("submit");

    let submission = Submission {
        source_code: payload.source_code,
        language: payload.language,
    };

    let summary = run_tests(&submission, &challenge.test_cases);
    for outcome in &summary.results {
        metrics::record_verdict(&submission.language, &outcome.verdict);
    }

    info!(
        challenge_id = %challenge_id,
        run_id = %summary.run_id,
        passed = summary.passed,
        total = summary.total,
        "Submission judged"
    );

    Json(summary.redacted()).into_response()
}

/// GET /metrics - Prometheus exposition
pub async fn metrics_handler() -> Response {
    match metrics::gather() {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {}", e),
        ),
    }
}
