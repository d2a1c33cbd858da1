//! Named pattern predicates and extractors shared by the mapper, selector,
//! and detail extractor. Each pattern is independent; callers fix the
//! evaluation order.

use once_cell::sync::Lazy;
use regex::Regex;

// Loose "$45" / "12.50" shape used for scoring and the selector check.
static AMOUNT_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s*\d+|\d+\.\d{2}").expect("amount hint pattern"));

static MONEY_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:amount|charged|charge|refund)\b").expect("money words pattern"));

static AUTH_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:password|login|sign in|locked|unlock|2fa|two[- ]factor)\b")
        .expect("auth terms pattern")
});

static AMOUNT_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s*[\d,]+(?:\.\d{2})?|\b\d+\.\d{2}\b").expect("amount pattern"));

// ISO dates, M/D/YYYY-style dates, and month-name dates.
static DATE_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{2,4}|[A-Za-z]{3,9} \d{1,2}(?:,\s*\d{4})?)\b")
        .expect("date pattern")
});

static LAST4_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("last4 pattern"));

static TXN_ID_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:tx|txn|transaction)[-_]?[A-Za-z0-9]{4,}\b").expect("txn id pattern")
});

pub fn mentions_amount(lowered: &str) -> bool {
    AMOUNT_HINT.is_match(lowered) || MONEY_WORDS.is_match(lowered)
}

pub fn mentions_auth_terms(lowered: &str) -> bool {
    AUTH_TERMS.is_match(lowered)
}

/// Narrower than [`mentions_amount`]: the shape alone, no money words.
pub fn has_amount_shape(text: &str) -> bool {
    AMOUNT_HINT.is_match(text)
}

pub fn find_amount(text: &str) -> Option<&str> {
    AMOUNT_VALUE.find(text).map(|m| m.as_str())
}

pub fn find_date(text: &str) -> Option<&str> {
    DATE_VALUE.find(text).map(|m| m.as_str())
}

pub fn find_last4(text: &str) -> Option<&str> {
    LAST4_VALUE.find(text).map(|m| m.as_str())
}

pub fn find_transaction_id(text: &str) -> Option<&str> {
    TXN_ID_VALUE.find(text).map(|m| m.as_str())
}
