// Prometheus counters for judge traffic

use bridge_judge::{Language, Verdict};
use lazy_static::lazy_static;
use prometheus::core::Collector;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use tracing::warn;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref EVALUATIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("bridge_evaluations_total", "Test case evaluations by language and outcome"),
        &["language", "outcome"]
    )
    .expect("metric can be created");
    pub static ref RUNS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("bridge_runs_total", "Judge requests by kind"),
        &["kind"]
    )
    .expect("metric can be created");
}

/// Register all collectors; safe to call more than once
pub fn register_metrics() {
    let collectors: [Box<dyn Collector>; 2] = [
        Box::new(EVALUATIONS_TOTAL.clone()),
        Box::new(RUNS_TOTAL.clone()),
    ];
    for collector in collectors {
        match REGISTRY.register(collector) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => warn!(error = %e, "Failed to register metric collector"),
        }
    }
}

fn language_label(declared: &str) -> &'static str {
    declared
        .parse::<Language>()
        .map(|lang| lang.as_str())
        .unwrap_or("unsupported")
}

fn outcome_label(verdict: &Verdict) -> &'static str {
    match (verdict.passed, verdict.error.is_some()) {
        (true, _) => "passed",
        (false, true) => "error",
        (false, false) => "wrong_answer",
    }
}

pub fn record_verdict(declared_language: &str, verdict: &Verdict) {
    EVALUATIONS_TOTAL
        .with_label_values(&[language_label(declared_language), outcome_label(verdict)])
        .inc();
}

pub fn record_run(kind: &str) {
    RUNS_TOTAL.with_label_values(&[kind]).inc();
}

/// Text exposition of everything in the registry
pub fn gather() -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(passed: bool, error: Option<&str>) -> Verdict {
        Verdict {
            passed,
            input: "[1,2]\n3".to_string(),
            output: "[0,1]".to_string(),
            expected: "[0,1]".to_string(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(language_label("C++"), "cpp");
        assert_eq!(language_label("ruby"), "unsupported");
        assert_eq!(outcome_label(&verdict(true, None)), "passed");
        assert_eq!(outcome_label(&verdict(false, Some("boom"))), "error");
        assert_eq!(outcome_label(&verdict(false, None)), "wrong_answer");
    }

    #[test]
    fn test_register_metrics_twice() {
        register_metrics();
        register_metrics();
        record_run("run");

        let text = gather().unwrap();
        assert_eq!(text.matches("# HELP bridge_runs_total").count(), 1);
    }

    #[test]
    fn test_gather_includes_recorded_counters() {
        register_metrics();
        record_verdict("py", &verdict(true, None));
        record_run("evaluate");

        let text = gather().unwrap();
        assert!(text.contains("bridge_evaluations_total"));
        assert!(text.contains("bridge_runs_total"));
    }
}
