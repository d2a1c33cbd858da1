use crate::models::{Category, ExtractedDetails};

/// Missing required fields always win; otherwise each category maps to one
/// fixed canned sentence. The match is exhaustive so a new category cannot
/// land without a reply.
pub fn generate_reply(category: Category, details: &ExtractedDetails) -> String {
    if !details.missing_required.is_empty() {
        return format!(
            "I can help with {}. Please provide the following required details: {}.",
            category.label().to_lowercase(),
            details.missing_required.join(", ")
        );
    }

    match category {
        Category::TransactionInquiry => {
            "Thanks — I see this is a transaction inquiry. I will look into the transaction and get back; could you confirm the amount and date if not already provided?"
        }
        Category::CardServices => {
            "Sorry to hear about your card. I can help block and replace it. Please confirm the last 4 digits of the card."
        }
        Category::AccountAccess => {
            "I can help you regain access. Would you like me to send a password reset link or start an account verification flow?"
        }
        Category::BillingIssue => {
            "Thanks — I can review the billing issue and raise a dispute if needed. Please confirm the transaction amount and invoice number (if available)."
        }
        Category::AccountOpening => {
            "We can help open a new account. Please tell us the account type (checking/savings) and full name to begin the application."
        }
        Category::AccountStatement => {
            "I can provide the statement. Which statement period would you like (e.g., March 2025)?"
        }
        Category::LoanInquiry => {
            "I can help with loan information. Are you asking about repayments, interest rates, or applying for a new loan?"
        }
        Category::GeneralInformation => {
            "Thanks for contacting us. Can you please provide a bit more detail so we can help (e.g., account number last 4 digits or date of transaction)?"
        }
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_take_precedence() {
        let details = ExtractedDetails {
            required: vec!["card_last4: MISSING".to_string()],
            optional: Vec::new(),
            missing_required: vec!["card_last4".to_string()],
        };
        assert_eq!(
            generate_reply(Category::CardServices, &details),
            "I can help with card services. Please provide the following required details: card_last4."
        );
    }

    #[test]
    fn multiple_missing_fields_are_comma_joined() {
        let details = ExtractedDetails {
            required: Vec::new(),
            optional: Vec::new(),
            missing_required: vec!["account_type".to_string(), "full_name".to_string()],
        };
        assert_eq!(
            generate_reply(Category::AccountOpening, &details),
            "I can help with account opening. Please provide the following required details: account_type, full_name."
        );
    }

    #[test]
    fn complete_details_get_the_canned_reply() {
        let details = ExtractedDetails::default();
        let reply = generate_reply(Category::TransactionInquiry, &details);
        assert!(reply.starts_with("Thanks — I see this is a transaction inquiry."));
    }

    #[test]
    fn general_information_prompts_for_more_detail() {
        let reply = generate_reply(Category::GeneralInformation, &ExtractedDetails::default());
        assert!(reply.starts_with("Thanks for contacting us."));
    }
}
