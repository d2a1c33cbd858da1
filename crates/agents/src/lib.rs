use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use serde_json::Value;
use teller_core::{
    require_text, run_stages, TriageInput, TriageReport, DEFAULT_MAX_CANDIDATES,
};
use teller_observability::{AppMetrics, MetricsSnapshot};
use tracing::{info, instrument};
use uuid::Uuid;

/// Async front door over the pure pipeline: metrics, spans, and the untyped
/// entry check. No await point suspends and no I/O happens inside a call.
#[derive(Clone)]
pub struct TriageAgent {
    metrics: Arc<AppMetrics>,
}

impl TriageAgent {
    pub fn new(metrics: Arc<AppMetrics>) -> Self {
        Self { metrics }
    }

    #[instrument(skip(self, input))]
    pub async fn triage(&self, input: TriageInput) -> Result<TriageReport> {
        let started = Instant::now();
        self.metrics.inc_query();

        let request_id = Uuid::new_v4();
        let max_candidates = input.max_candidates.unwrap_or(DEFAULT_MAX_CANDIDATES);
        let outcome = run_stages(&input.text, max_candidates);

        if outcome.candidates.first().is_some_and(|c| c.score == 0) {
            self.metrics.inc_fallback();
        }
        if !outcome.details.missing_required.is_empty() {
            self.metrics.inc_missing_details();
        }

        info!(
            request_id = %request_id,
            intent = %outcome.intent,
            chosen = %outcome.selection.category.label(),
            reason = %outcome.selection.reason,
            candidates = outcome.candidates.len(),
            missing_required = outcome.details.missing_required.len(),
            "query triaged"
        );

        let report = outcome.into_report();
        self.metrics.observe_latency(started.elapsed());
        Ok(report)
    }

    pub async fn triage_value(&self, value: &Value) -> Result<TriageReport> {
        let text = require_text(value)?;
        self.triage(TriageInput::text(text)).await
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
