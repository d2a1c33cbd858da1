pub mod error;
pub mod extract;
pub mod intent;
pub mod mapper;
pub mod models;
pub mod patterns;
pub mod pipeline;
pub mod reply;
pub mod selector;
pub mod taxonomy;

pub use error::TriageError;
pub use extract::extract_details;
pub use intent::{classify_intent, interpret, lead_clause};
pub use mapper::{map_to_categories, DEFAULT_MAX_CANDIDATES};
pub use models::*;
pub use pipeline::{require_text, run_pipeline, run_pipeline_untyped, run_stages, StageOutcome};
pub use reply::generate_reply;
pub use selector::choose_category;
pub use taxonomy::{detail_fields, trigger_phrases};
