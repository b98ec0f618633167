//! Shared mock for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::adapters::InMemoryDecisionApi;
use crate::domain::analysis::{AnalysisSummary, StatsOverview, SummaryQuery, WeeklyReport};
use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::journal::{Decision, DecisionDraft, DecisionPatch, NewDecision};
use crate::ports::{ApiError, DecisionApi, DeleteAck};

/// In-memory service that records every request and can be told to fail.
pub struct MockDecisionApi {
    inner: InMemoryDecisionApi,
    requests: Mutex<Vec<String>>,
    patches: Mutex<Vec<(DecisionId, DecisionPatch)>>,
    failure: Mutex<Option<ApiError>>,
}

impl MockDecisionApi {
    pub fn new() -> Self {
        Self {
            inner: InMemoryDecisionApi::new(UserId::new("test-user").unwrap()),
            requests: Mutex::new(Vec::new()),
            patches: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Every following request fails with `err`.
    pub fn fail_with(&self, err: ApiError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn patches(&self) -> Vec<(DecisionId, DecisionPatch)> {
        self.patches.lock().unwrap().clone()
    }

    /// Stores a decision directly, bypassing the request log.
    pub async fn stored(&self, category: &str, title: &str) -> Decision {
        let new = DecisionDraft {
            category_id: category.to_string(),
            title: title.to_string(),
            ..DecisionDraft::default()
        }
        .validate()
        .unwrap();
        self.inner.create_decision(&new).await.unwrap()
    }

    pub async fn seed(&self, decisions: Vec<Decision>) {
        self.inner.seed(decisions).await;
    }

    fn record(&self, request: &str) -> Result<(), ApiError> {
        self.requests.lock().unwrap().push(request.to_string());
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DecisionApi for MockDecisionApi {
    async fn create_decision(&self, decision: &NewDecision) -> Result<Decision, ApiError> {
        self.record("create")?;
        self.inner.create_decision(decision).await
    }

    async fn list_decisions(&self) -> Result<Vec<Decision>, ApiError> {
        self.record("list")?;
        self.inner.list_decisions().await
    }

    async fn get_decision(&self, id: &DecisionId) -> Result<Decision, ApiError> {
        self.record("get")?;
        self.inner.get_decision(id).await
    }

    async fn update_decision(&self, id: &DecisionId, patch: &DecisionPatch) -> Result<Decision, ApiError> {
        self.record("update")?;
        self.patches.lock().unwrap().push((id.clone(), patch.clone()));
        self.inner.update_decision(id, patch).await
    }

    async fn delete_decision(&self, id: &DecisionId) -> Result<DeleteAck, ApiError> {
        self.record("delete")?;
        self.inner.delete_decision(id).await
    }

    async fn get_analysis(&self) -> Result<StatsOverview, ApiError> {
        self.record("analysis")?;
        self.inner.get_analysis().await
    }

    async fn get_summary(&self, query: &SummaryQuery) -> Result<AnalysisSummary, ApiError> {
        self.record("summary")?;
        self.inner.get_summary(query).await
    }

    async fn get_pending(&self) -> Result<Vec<Decision>, ApiError> {
        self.record("pending")?;
        self.inner.get_pending().await
    }

    async fn get_weekly_report(&self, week_start: NaiveDate) -> Result<WeeklyReport, ApiError> {
        self.record("weekly")?;
        self.inner.get_weekly_report(week_start).await
    }
}
