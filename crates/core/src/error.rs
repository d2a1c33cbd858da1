use thiserror::Error;

/// The pipeline's only failure mode: the entry point was handed something
/// that is not text. Every stage past that check is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("query must be text, got {found}")]
    InvalidInput { found: &'static str },
}
