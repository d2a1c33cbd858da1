use crate::models::IntentKind;

const ASK_MARKERS: &[&str] = &[
    "how", "why", "when", "what", "can i", "could i", "do i", "is it", "are you", "please",
];

const REPORT_MARKERS: &[&str] = &[
    "i am", "i've", "i have", "my", "we have", "we're", "we are",
];

/// Question markers win over statement markers; anything else is a request.
pub fn classify_intent(query: &str) -> IntentKind {
    let lowered = query.to_lowercase();

    if contains_any(&lowered, ASK_MARKERS) {
        IntentKind::Asks
    } else if contains_any(&lowered, REPORT_MARKERS) {
        IntentKind::Reports
    } else {
        IntentKind::Requests
    }
}

/// Trimmed prefix up to the first `.`, `?`, `!`, or newline.
pub fn lead_clause(query: &str) -> &str {
    query
        .trim()
        .split(['.', '?', '!', '\n'])
        .next()
        .unwrap_or_default()
        .trim()
}

pub fn interpret(query: &str) -> String {
    format!("{}: {}", classify_intent(query).label(), lead_clause(query))
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
