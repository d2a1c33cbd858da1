use crate::models::{CandidateScore, Category, Selection};
use crate::patterns;

/// Overrides apply only when there is more than one candidate: a card
/// mention wins first, then an amount-shaped token.
pub fn choose_category(candidates: &[CandidateScore], query: &str) -> Selection {
    if candidates.is_empty() {
        // The mapper never returns an empty list; this keeps the selector total.
        return Selection {
            category: Category::GeneralInformation,
            reason: "fallback".to_string(),
        };
    }

    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    let top = &ranked[0];

    if ranked.len() > 1 {
        let lowered = query.to_lowercase();
        let has = |category: Category| ranked.iter().any(|c| c.category == category);

        if has(Category::CardServices) && lowered.contains("card") {
            return Selection {
                category: Category::CardServices,
                reason: "query mentions card".to_string(),
            };
        }
        if has(Category::TransactionInquiry) && patterns::has_amount_shape(&lowered) {
            return Selection {
                category: Category::TransactionInquiry,
                reason: "includes amount pattern".to_string(),
            };
        }
    }

    Selection {
        category: top.category,
        reason: top.reason.clone(),
    }
}
