//! End-to-end journal flows against the in-memory service.
//!
//! These tests drive the application handlers the way a screen would:
//! 1. Create a decision and see it pending
//! 2. Record an outcome and see it leave the pending list
//! 3. Review statistics and the weekly report

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};

use decision_journal::adapters::InMemoryDecisionApi;
use decision_journal::application::{
    CreateDecisionCommand, CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler,
    GetDecisionHandler, GetDecisionQuery, GetStatsOverviewHandler, GetWeeklyReviewHandler,
    GetWeeklyReviewQuery, JournalError, ListDecisionsHandler, ListDecisionsQuery,
    ListPendingHandler, NoticeKind, RevertOutcomeCommand, RevertOutcomeHandler,
    SubmitOutcomeCommand, SubmitOutcomeError, SubmitOutcomeHandler, UserNotice,
};
use decision_journal::domain::foundation::{Confidence, DecisionId, Timestamp, UserId};
use decision_journal::domain::journal::{
    CategoryId, Decision, DecisionDraft, DecisionMeta, DecisionResult, InvestMeta, Tags,
    TradeAction,
};
use decision_journal::domain::outcome::{OutcomeForm, OutcomeRejection};
use decision_journal::ports::DecisionApi;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn journal() -> (Arc<InMemoryDecisionApi>, Arc<dyn DecisionApi>) {
    let memory = Arc::new(InMemoryDecisionApi::new(UserId::new("flow-user").unwrap()));
    let api: Arc<dyn DecisionApi> = memory.clone();
    (memory, api)
}

fn draft(category: &str, title: &str) -> DecisionDraft {
    DecisionDraft {
        category_id: category.to_string(),
        title: title.to_string(),
        tags: Tags::parse("routine, #focus"),
        confidence: Confidence::try_new(4).unwrap(),
        ..DecisionDraft::default()
    }
}

async fn create(api: &Arc<dyn DecisionApi>, draft: DecisionDraft) -> Decision {
    CreateDecisionHandler::new(api.clone())
        .handle(CreateDecisionCommand { draft })
        .await
        .unwrap()
}

async fn resolve(api: &Arc<dyn DecisionApi>, decision: Decision, form: OutcomeForm) -> Result<Decision, SubmitOutcomeError> {
    SubmitOutcomeHandler::new(api.clone())
        .handle(SubmitOutcomeCommand { decision, form })
        .await
}

fn outcome(result: DecisionResult) -> OutcomeForm {
    OutcomeForm {
        result: Some(result),
        confidence: Confidence::try_new(4).unwrap(),
        ..OutcomeForm::default()
    }
}

fn at(year: i32, month: u32, day: u32) -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap())
}

fn seeded(id: &str, result: DecisionResult, created: Timestamp) -> Decision {
    Decision::new(
        DecisionId::new(id).unwrap(),
        UserId::new("flow-user").unwrap(),
        CategoryId::new("daily").unwrap(),
        format!("decision {}", id),
        created,
    )
    .unwrap()
    .with_result(result, (!result.is_pending()).then(|| created.add_days(1)))
}

// =============================================================================
// Create and resolve
// =============================================================================

#[tokio::test]
async fn created_decision_starts_pending() {
    let (_, api) = journal();

    let created = create(&api, draft("health", "Run three times a week")).await;

    assert_eq!(created.result(), DecisionResult::Pending);
    assert!(created.resolved_at().is_none());
    assert_eq!(created.tags().as_slice(), ["routine", "focus"]);

    let pending = ListPendingHandler::new(api.clone()).handle().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id(), created.id());
}

#[tokio::test]
async fn outcome_moves_decision_out_of_pending() {
    let (_, api) = journal();
    let created = create(&api, draft("health", "Run three times a week")).await;

    let resolved = resolve(&api, created.clone(), outcome(DecisionResult::Positive))
        .await
        .unwrap();

    assert_eq!(resolved.result(), DecisionResult::Positive);
    assert!(resolved.resolved_at().is_some());
    assert!(ListPendingHandler::new(api.clone()).handle().await.unwrap().is_empty());

    let fetched = GetDecisionHandler::new(api.clone())
        .handle(GetDecisionQuery {
            decision_id: created.id().clone(),
        })
        .await
        .unwrap();
    assert_eq!(fetched.result(), DecisionResult::Positive);
}

#[tokio::test]
async fn invest_outcome_stores_return_rate() {
    let (_, api) = journal();
    let mut new = draft("invest", "Buy the index fund");
    new.meta = Some(DecisionMeta::Invest(InvestMeta {
        symbol: Some("KODEX 200".to_string()),
        action: Some(TradeAction::Buy),
        ..InvestMeta::default()
    }));
    let created = create(&api, new).await;

    let mut form = outcome(DecisionResult::Positive);
    form.entry_price = "72,000".to_string();
    form.exit_price = "76,000".to_string();
    let resolved = resolve(&api, created, form).await.unwrap();

    let invest = resolved.meta().as_invest().unwrap();
    assert_eq!(invest.symbol.as_deref(), Some("KODEX 200"));
    assert_eq!(invest.entry_price, Some(72_000.0));
    assert_eq!(invest.return_rate, Some(5.6));
}

#[tokio::test]
async fn rejected_outcome_sends_nothing() {
    let (memory, api) = journal();
    let created = create(&api, draft("invest", "Sell before earnings")).await;

    let mut form = outcome(DecisionResult::Negative);
    form.entry_price = "abc".to_string();
    form.exit_price = "100".to_string();
    let err = resolve(&api, created.clone(), form).await.unwrap_err();

    assert_eq!(
        err,
        SubmitOutcomeError::Rejected(OutcomeRejection::InvalidNumber {
            field: "entryPrice",
            input: "abc".to_string(),
        })
    );
    assert_eq!(UserNotice::from(&err).kind, NoticeKind::Info);

    let stored = memory.get_decision(created.id()).await.unwrap();
    assert!(stored.is_pending());
}

#[tokio::test]
async fn revert_returns_decision_to_pending() {
    let (_, api) = journal();
    let created = create(&api, draft("study", "Read one paper a day")).await;
    let resolved = resolve(&api, created, outcome(DecisionResult::Neutral)).await.unwrap();

    let reverted = RevertOutcomeHandler::new(api.clone())
        .handle(RevertOutcomeCommand {
            decision_id: resolved.id().clone(),
            confidence: Confidence::try_new(2).unwrap(),
        })
        .await
        .unwrap();

    assert!(reverted.is_pending());
    assert!(reverted.resolved_at().is_none());
    assert_eq!(reverted.confidence().value(), 2);
    assert_eq!(ListPendingHandler::new(api.clone()).handle().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleted_decision_is_not_found() {
    let (_, api) = journal();
    let created = create(&api, draft("daily", "No phone before nine")).await;

    let ack = DeleteDecisionHandler::new(api.clone())
        .handle(DeleteDecisionCommand {
            decision_id: created.id().clone(),
        })
        .await
        .unwrap();
    assert!(ack.success);

    let err = GetDecisionHandler::new(api.clone())
        .handle(GetDecisionQuery {
            decision_id: created.id().clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, JournalError::NotFound(ref id) if id == created.id()));
    assert_eq!(UserNotice::from(&err).kind, NoticeKind::NotFound);
}

// =============================================================================
// Review
// =============================================================================

#[tokio::test]
async fn list_filters_by_result_newest_first() {
    let (memory, api) = journal();
    memory
        .seed(vec![
            seeded("old", DecisionResult::Positive, at(2024, 3, 1)),
            seeded("new", DecisionResult::Positive, at(2024, 3, 5)),
            seeded("open", DecisionResult::Pending, at(2024, 3, 3)),
        ])
        .await;

    let positive = ListDecisionsHandler::new(api.clone())
        .handle(ListDecisionsQuery {
            category_id: None,
            result: Some(DecisionResult::Positive),
        })
        .await
        .unwrap();

    let ids: Vec<&str> = positive.iter().map(|d| d.id().as_str()).collect();
    assert_eq!(ids, ["new", "old"]);
}

#[tokio::test]
async fn overview_counts_only_completed_in_rate() {
    let (memory, api) = journal();
    memory
        .seed(vec![
            seeded("a", DecisionResult::Positive, at(2024, 3, 4)),
            seeded("b", DecisionResult::Negative, at(2024, 3, 4)),
            seeded("c", DecisionResult::Negative, at(2024, 3, 4)),
            seeded("d", DecisionResult::Positive, at(2024, 3, 4)),
            seeded("e", DecisionResult::Pending, at(2024, 3, 4)),
        ])
        .await;

    let overview = GetStatsOverviewHandler::new(api.clone()).handle().await.unwrap();

    assert_eq!(overview.counts.total, 5);
    assert_eq!(overview.positive_rate.completed, 4);
    assert_eq!(overview.positive_rate.ratio(), 0.5);
    let bucketed: usize = overview.by_confidence.iter().map(|b| b.total).sum();
    assert_eq!(bucketed, 4);
}

#[tokio::test]
async fn weekly_review_compares_with_previous_week() {
    let (memory, api) = journal();
    let mut decisions = Vec::new();
    // Week of 2024-03-04: ten completed, four positive.
    for i in 0..10 {
        let result = if i < 4 {
            DecisionResult::Positive
        } else {
            DecisionResult::Negative
        };
        decisions.push(seeded(&format!("cur-{}", i), result, at(2024, 3, 5)));
    }
    // Week of 2024-02-26: four completed (one positive) and two pending.
    for i in 0..6 {
        let result = match i {
            0 => DecisionResult::Positive,
            1..=3 => DecisionResult::Neutral,
            _ => DecisionResult::Pending,
        };
        decisions.push(seeded(&format!("prev-{}", i), result, at(2024, 2, 27)));
    }
    memory.seed(decisions).await;

    let review = GetWeeklyReviewHandler::new(api.clone())
        .handle(GetWeeklyReviewQuery {
            day: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(review.report.week_start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    assert_eq!(review.delta.count_delta.total, 4);
    assert!((review.delta.result_rate_delta.positive - 15.0).abs() < 1e-9);
}
