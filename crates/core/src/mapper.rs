use crate::models::{CandidateScore, Category};
use crate::patterns;
use crate::taxonomy;

pub const DEFAULT_MAX_CANDIDATES: usize = 3;

/// Never returns an empty list; with no match at all the General Information
/// fallback is the single candidate.
pub fn map_to_categories(query: &str, max_candidates: usize) -> Vec<CandidateScore> {
    let lowered = query.to_lowercase();

    let mut scores: Vec<(Category, u32)> = Category::ALL
        .iter()
        .map(|&category| {
            let hits = taxonomy::trigger_phrases(category)
                .iter()
                .filter(|phrase| lowered.contains(**phrase))
                .count() as u32;
            (category, hits)
        })
        .collect();

    // Bonus rules stack on top of keyword hits, in this order.
    if patterns::mentions_amount(&lowered) {
        bump(&mut scores, Category::TransactionInquiry, 1);
        bump(&mut scores, Category::BillingIssue, 1);
    }
    if patterns::mentions_auth_terms(&lowered) {
        bump(&mut scores, Category::AccountAccess, 2);
    }

    // Stable sort: equal scores keep the Category declaration order.
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    let candidates: Vec<CandidateScore> = scores
        .into_iter()
        .filter(|(_, score)| *score > 0)
        .take(max_candidates)
        .map(|(category, score)| CandidateScore {
            category,
            score,
            reason: format!("matched keywords ({score})"),
        })
        .collect();

    if candidates.is_empty() {
        return vec![CandidateScore {
            category: Category::GeneralInformation,
            score: 0,
            reason: "no matching keywords".to_string(),
        }];
    }

    candidates
}

fn bump(scores: &mut [(Category, u32)], target: Category, by: u32) {
    if let Some(entry) = scores.iter_mut().find(|(category, _)| *category == target) {
        entry.1 += by;
    }
}
