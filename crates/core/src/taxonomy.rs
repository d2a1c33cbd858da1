use crate::models::{Category, FieldSpec};

/// Lowercase literal substrings; every phrase that appears in the query adds
/// one point, so "credit card" scores both "card" and "credit card".
pub fn trigger_phrases(category: Category) -> &'static [&'static str] {
    match category {
        Category::AccountOpening => &[
            "open account",
            "new account",
            "open a checking",
            "apply account",
            "signup",
        ],
        Category::BillingIssue => &[
            "charge",
            "bill",
            "billing",
            "invoice",
            "overcharged",
            "refund",
        ],
        Category::AccountAccess => &[
            "login",
            "sign in",
            "password",
            "locked out",
            "can't access",
            "unlock",
        ],
        Category::TransactionInquiry => &[
            "transaction",
            "transfer",
            "withdrawal",
            "payment",
            "pending",
            "unauthorized",
            "charge",
        ],
        Category::CardServices => &[
            "card",
            "credit card",
            "debit card",
            "lost card",
            "stolen card",
            "block my card",
            "replace card",
        ],
        Category::AccountStatement => &[
            "statement",
            "e-statement",
            "pdf statement",
            "monthly statement",
            "download statement",
        ],
        Category::LoanInquiry => &[
            "loan",
            "mortgage",
            "interest rate",
            "apply for loan",
            "loan payment",
        ],
        Category::GeneralInformation => &[
            "hours",
            "location",
            "branch",
            "interest",
            "contact",
            "information",
        ],
    }
}

/// Detail fields per category, in reporting order. General Information
/// carries no template.
pub fn detail_fields(category: Category) -> &'static [FieldSpec] {
    const TRANSACTION_INQUIRY: &[FieldSpec] = &[
        FieldSpec::required("transaction_date"),
        FieldSpec::required("amount"),
        FieldSpec::optional("merchant"),
        FieldSpec::optional("card_last4"),
    ];
    const CARD_SERVICES: &[FieldSpec] = &[
        FieldSpec::required("card_last4"),
        FieldSpec::optional("date_lost_or_stolen"),
    ];
    const ACCOUNT_ACCESS: &[FieldSpec] = &[
        FieldSpec::optional("preferred_contact_method"),
        FieldSpec::optional("last_successful_login"),
    ];
    const BILLING_ISSUE: &[FieldSpec] = &[
        FieldSpec::optional("invoice_number"),
        FieldSpec::required("amount"),
        FieldSpec::optional("billing_period"),
    ];
    const ACCOUNT_OPENING: &[FieldSpec] = &[
        FieldSpec::required("account_type"),
        FieldSpec::required("full_name"),
        FieldSpec::required("id_document"),
    ];
    const ACCOUNT_STATEMENT: &[FieldSpec] = &[
        FieldSpec::required("statement_period"),
        FieldSpec::optional("email"),
    ];
    const LOAN_INQUIRY: &[FieldSpec] = &[
        FieldSpec::required("loan_type"),
        FieldSpec::optional("loan_account_number"),
    ];
    match category {
        Category::TransactionInquiry => TRANSACTION_INQUIRY,
        Category::CardServices => CARD_SERVICES,
        Category::AccountAccess => ACCOUNT_ACCESS,
        Category::BillingIssue => BILLING_ISSUE,
        Category::AccountOpening => ACCOUNT_OPENING,
        Category::AccountStatement => ACCOUNT_STATEMENT,
        Category::LoanInquiry => LOAN_INQUIRY,
        Category::GeneralInformation => &[],
    }
}
