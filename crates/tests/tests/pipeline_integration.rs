use serde_json::json;
use teller_agents::TriageAgent;
use teller_core::{Category, TriageError, TriageInput};
use teller_observability::AppMetrics;

fn agent() -> TriageAgent {
    TriageAgent::new(AppMetrics::shared())
}

#[tokio::test]
async fn stolen_card_query_asks_for_the_last4() {
    let report = agent()
        .triage(TriageInput::text("My card was stolen, please block it"))
        .await
        .unwrap();

    assert_eq!(report.intent, "Asks: My card was stolen, please block it");
    assert_eq!(report.chosen, "Card Services — matched keywords (1)");
    assert_eq!(report.details.missing_required, vec!["card_last4"]);
    assert_eq!(
        report.reply,
        "I can help with card services. Please provide the following required details: card_last4."
    );
}

#[tokio::test]
async fn duplicate_charge_query_resolves_to_transaction_inquiry() {
    let report = agent()
        .triage(TriageInput::text("I was charged $45.00 twice on 2024-03-01"))
        .await
        .unwrap();

    assert_eq!(
        report.candidates,
        vec![
            "Billing Issue — matched keywords (2)",
            "Transaction Inquiry — matched keywords (2)"
        ]
    );
    assert_eq!(report.chosen, "Transaction Inquiry — includes amount pattern");
    assert_eq!(
        report.details.required,
        vec!["transaction_date: 2024-03-01", "amount: $45.00"]
    );
    assert!(report.details.missing_required.is_empty());
    assert!(report
        .reply
        .starts_with("Thanks — I see this is a transaction inquiry."));
}

#[tokio::test]
async fn empty_query_falls_back_to_general_information() {
    let report = agent().triage(TriageInput::text("")).await.unwrap();

    assert_eq!(
        report.candidates,
        vec!["General Information — no matching keywords"]
    );
    assert_eq!(report.chosen, "General Information — no matching keywords");
    assert!(report.details.required.is_empty());
    assert!(report.details.optional.is_empty());
    assert!(report.details.missing_required.is_empty());
    assert!(report.reply.starts_with("Thanks for contacting us."));
}

#[tokio::test]
async fn identical_queries_yield_identical_reports() {
    let agent = agent();
    let first = agent
        .triage(TriageInput::text("can I unlock my login? code 2fa failed"))
        .await
        .unwrap();
    let second = agent
        .triage(TriageInput::text("can I unlock my login? code 2fa failed"))
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn non_text_input_is_rejected_without_a_partial_result() {
    let agent = agent();
    for value in [
        json!(42),
        json!(true),
        json!(null),
        json!(["my card was stolen"]),
        json!({"text": "my card was stolen"}),
    ] {
        let err = agent.triage_value(&value).await.unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<TriageError>(),
                Some(TriageError::InvalidInput { .. })
            ),
            "{value}"
        );
    }
}

#[tokio::test]
async fn card_mention_overrides_a_higher_ranked_candidate() {
    let report = agent()
        .triage(TriageInput::text("unauthorized transfer made with the card"))
        .await
        .unwrap();

    // Transaction Inquiry outscores Card Services here, yet the card
    // mention still wins the selection.
    assert!(report
        .candidates
        .iter()
        .any(|c| c.starts_with("Transaction Inquiry")));
    assert_eq!(report.chosen, "Card Services — query mentions card");
}

#[tokio::test]
async fn chosen_category_is_always_in_the_fixed_set() {
    let agent = agent();
    let queries = [
        "",
        "open a checking account signup",
        "refund the invoice overcharge",
        "locked out of sign in",
        "pending withdrawal of $12.00",
        "replace my lost card",
        "download statement pdf",
        "mortgage interest rate question",
        "where is the nearest branch",
        "zzz",
    ];

    for query in queries {
        let report = agent.triage(TriageInput::text(query)).await.unwrap();
        let matched = Category::ALL
            .iter()
            .any(|category| report.chosen.starts_with(category.label()));
        assert!(matched, "{query}: {}", report.chosen);
    }
}

#[tokio::test]
async fn metrics_track_fallbacks_and_missing_details() {
    let metrics = AppMetrics::shared();
    let agent = TriageAgent::new(metrics.clone());

    agent.triage(TriageInput::text("zzz qqq")).await.unwrap();
    agent
        .triage(TriageInput::text("My card was stolen, please block it"))
        .await
        .unwrap();

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.queries_total, 2);
    assert_eq!(snapshot.fallback_total, 1);
    assert_eq!(snapshot.missing_details_total, 1);
}

#[tokio::test]
async fn max_candidates_limits_the_ranked_list() {
    let report = agent()
        .triage(TriageInput {
            text: "charge on my card for a loan statement transfer".to_string(),
            max_candidates: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(report.candidates.len(), 2);
}
