use serde_json::Value;

use crate::error::TriageError;
use crate::extract::extract_details;
use crate::intent::interpret;
use crate::mapper::{map_to_categories, DEFAULT_MAX_CANDIDATES};
use crate::models::{CandidateScore, ExtractedDetails, Selection, TriageReport};
use crate::reply::generate_reply;
use crate::selector::choose_category;

/// Structured stage outputs; callers log and meter these before flattening
/// into the report.
#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub intent: String,
    pub candidates: Vec<CandidateScore>,
    pub selection: Selection,
    pub details: ExtractedDetails,
    pub reply: String,
}

impl StageOutcome {
    pub fn into_report(self) -> TriageReport {
        TriageReport {
            intent: self.intent,
            candidates: self.candidates.iter().map(CandidateScore::summary).collect(),
            chosen: self.selection.summary(),
            details: self.details,
            reply: self.reply,
        }
    }
}

/// Runs the five stages strictly in order; total over any text.
pub fn run_stages(query: &str, max_candidates: usize) -> StageOutcome {
    let intent = interpret(query);
    let candidates = map_to_categories(query, max_candidates);
    let selection = choose_category(&candidates, query);
    let details = extract_details(query, selection.category);
    let reply = generate_reply(selection.category, &details);

    StageOutcome {
        intent,
        candidates,
        selection,
        details,
        reply,
    }
}

pub fn run_pipeline(query: &str) -> TriageReport {
    run_stages(query, DEFAULT_MAX_CANDIDATES).into_report()
}

/// Untyped entry: anything that is not a JSON string is rejected before any
/// stage runs.
pub fn run_pipeline_untyped(value: &Value) -> Result<TriageReport, TriageError> {
    Ok(run_pipeline(require_text(value)?))
}

pub fn require_text(value: &Value) -> Result<&str, TriageError> {
    value.as_str().ok_or(TriageError::InvalidInput {
        found: json_type_name(value),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
