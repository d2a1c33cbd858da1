use serde::{Deserialize, Serialize};

/// The closed set of support topics. Declaration order doubles as the
/// tie-break order when candidate scores are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AccountOpening,
    BillingIssue,
    AccountAccess,
    TransactionInquiry,
    CardServices,
    AccountStatement,
    LoanInquiry,
    GeneralInformation,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::AccountOpening,
        Category::BillingIssue,
        Category::AccountAccess,
        Category::TransactionInquiry,
        Category::CardServices,
        Category::AccountStatement,
        Category::LoanInquiry,
        Category::GeneralInformation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AccountOpening => "Account Opening",
            Self::BillingIssue => "Billing Issue",
            Self::AccountAccess => "Account Access",
            Self::TransactionInquiry => "Transaction Inquiry",
            Self::CardServices => "Card Services",
            Self::AccountStatement => "Account Statement",
            Self::LoanInquiry => "Loan Inquiry",
            Self::GeneralInformation => "General Information",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Asks,
    Reports,
    Requests,
}

impl IntentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Asks => "Asks",
            Self::Reports => "Reports",
            Self::Requests => "Requests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub requirement: Requirement,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Required,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Optional,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub category: Category,
    pub score: u32,
    pub reason: String,
}

impl CandidateScore {
    pub fn summary(&self) -> String {
        format!("{} — {}", self.category.label(), self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Category,
    pub reason: String,
}

impl Selection {
    pub fn summary(&self) -> String {
        format!("{} — {}", self.category.label(), self.reason)
    }
}

/// Fields pulled out of the query, reconciled against the chosen category's
/// template. With an empty template the lists hold the raw extracted pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDetails {
    pub required: Vec<String>,
    pub optional: Vec<String>,
    pub missing_required: Vec<String>,
}

/// The five pipeline outputs, in stage order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageReport {
    pub intent: String,
    pub candidates: Vec<String>,
    pub chosen: String,
    pub details: ExtractedDetails,
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageInput {
    pub text: String,
    pub max_candidates: Option<usize>,
}

impl TriageInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_candidates: None,
        }
    }
}
