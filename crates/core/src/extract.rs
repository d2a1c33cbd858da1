use std::collections::HashMap;

use crate::models::{Category, ExtractedDetails, Requirement};
use crate::patterns;
use crate::taxonomy;

/// Free-form extraction takes only the first match per pattern. Required
/// candidates enter the value map before optional ones; later insertions win
/// on a name collision.
pub fn extract_details(query: &str, category: Category) -> ExtractedDetails {
    let mut required_candidates: Vec<(&'static str, String)> = Vec::new();
    let mut optional_candidates: Vec<(&'static str, String)> = Vec::new();

    if let Some(amount) = patterns::find_amount(query) {
        required_candidates.push(("amount", amount.to_string()));
    }
    if let Some(date) = patterns::find_date(query) {
        required_candidates.push(("transaction_date", date.to_string()));
    }
    if let Some(last4) = patterns::find_last4(query) {
        optional_candidates.push(("card_last4", last4.to_string()));
    }
    if let Some(id) = patterns::find_transaction_id(query) {
        optional_candidates.push(("transaction_id", id.to_string()));
    }

    let template = taxonomy::detail_fields(category);
    if template.is_empty() {
        return ExtractedDetails {
            required: lines(&required_candidates),
            optional: lines(&optional_candidates),
            missing_required: Vec::new(),
        };
    }

    let mut values: HashMap<&str, &str> = HashMap::new();
    for (name, value) in required_candidates.iter().chain(optional_candidates.iter()) {
        values.insert(*name, value.as_str());
    }

    let mut required = Vec::new();
    let mut optional = Vec::new();
    let mut missing_required = Vec::new();

    for spec in template {
        let value = values.get(spec.name);
        match spec.requirement {
            Requirement::Required => match value {
                Some(value) => required.push(format!("{}: {}", spec.name, value)),
                None => {
                    missing_required.push(spec.name.to_string());
                    required.push(format!("{}: MISSING", spec.name));
                }
            },
            Requirement::Optional => match value {
                Some(value) => optional.push(format!("{}: {}", spec.name, value)),
                None => optional.push(format!("{}: not provided", spec.name)),
            },
        }
    }

    ExtractedDetails {
        required,
        optional,
        missing_required,
    }
}

fn lines(candidates: &[(&'static str, String)]) -> Vec<String> {
    candidates
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_inquiry_fills_both_required_fields() {
        let details = extract_details(
            "I was charged $45.00 twice on 2024-03-01",
            Category::TransactionInquiry,
        );
        assert_eq!(
            details.required,
            vec!["transaction_date: 2024-03-01", "amount: $45.00"]
        );
        // "2024" is the first bare four-digit run, so it lands in card_last4.
        assert_eq!(
            details.optional,
            vec!["merchant: not provided", "card_last4: 2024"]
        );
        assert!(details.missing_required.is_empty());
    }

    #[test]
    fn card_services_flags_a_missing_last4() {
        let details = extract_details("My card was stolen, please block it", Category::CardServices);
        assert_eq!(details.required, vec!["card_last4: MISSING"]);
        assert_eq!(details.optional, vec!["date_lost_or_stolen: not provided"]);
        assert_eq!(details.missing_required, vec!["card_last4"]);
    }

    #[test]
    fn empty_template_returns_raw_candidates() {
        let details = extract_details(
            "branch hours? ref TXN-98765, paid $10.00",
            Category::GeneralInformation,
        );
        assert_eq!(details.required, vec!["amount: $10.00"]);
        assert_eq!(details.optional, vec!["transaction_id: TXN-98765"]);
        assert!(details.missing_required.is_empty());
    }

    #[test]
    fn missing_required_is_a_subset_of_the_template() {
        for category in Category::ALL {
            let details = extract_details("nothing useful here", category);
            let required_names: Vec<&str> = taxonomy::detail_fields(category)
                .iter()
                .filter(|spec| spec.requirement == Requirement::Required)
                .map(|spec| spec.name)
                .collect();
            for name in &details.missing_required {
                assert!(required_names.contains(&name.as_str()), "{category:?}: {name}");
            }
        }
    }

    #[test]
    fn only_the_first_match_per_pattern_counts() {
        let details = extract_details(
            "charged $5.00 then $9.00 on 1/2/2024 and 3/4/2024",
            Category::TransactionInquiry,
        );
        assert_eq!(
            details.required,
            vec!["transaction_date: 1/2/2024", "amount: $5.00"]
        );
    }
}
