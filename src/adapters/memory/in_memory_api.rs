//! In-memory journal service.
//!
//! Behaves like the real service for a single user: assigns ids, keeps
//! `resolvedAt` in step with the result, and computes aggregates with the
//! local statistics module. Useful for tests and offline development.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use tokio::sync::RwLock;

use crate::domain::analysis::{
    pending_decisions, AnalysisSummary, StatsOverview, SummaryQuery, WeekRange, WeeklyReport,
    DEFAULT_TOP_TAGS,
};
use crate::domain::foundation::{DecisionId, Timestamp, UserId, ValidationError};
use crate::domain::journal::{Decision, DecisionPatch, NewDecision};
use crate::ports::{ApiError, DecisionApi, DeleteAck};

#[derive(Debug, Default)]
struct Store {
    decisions: Vec<Decision>,
    next_id: u64,
}

impl Store {
    fn position(&self, id: &DecisionId) -> Result<usize, ApiError> {
        self.decisions
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| ApiError::not_found(id))
    }
}

/// In-memory [`DecisionApi`].
#[derive(Debug, Clone)]
pub struct InMemoryDecisionApi {
    user_id: UserId,
    store: Arc<RwLock<Store>>,
    offset: FixedOffset,
    tag_limit: usize,
}

impl InMemoryDecisionApi {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            store: Arc::new(RwLock::new(Store::default())),
            offset: Utc.fix(),
            tag_limit: DEFAULT_TOP_TAGS,
        }
    }

    /// Time zone used to place weeks for the weekly report.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_tag_limit(mut self, limit: usize) -> Self {
        self.tag_limit = limit;
        self
    }

    /// Inserts existing decisions as-is (ids and timestamps preserved).
    pub async fn seed(&self, decisions: impl IntoIterator<Item = Decision>) {
        self.store.write().await.decisions.extend(decisions);
    }

    /// Number of stored decisions
    pub async fn len(&self) -> usize {
        self.store.read().await.decisions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn snapshot(&self) -> Vec<Decision> {
        self.store.read().await.decisions.clone()
    }
}

#[async_trait]
impl DecisionApi for InMemoryDecisionApi {
    async fn create_decision(&self, new: &NewDecision) -> Result<Decision, ApiError> {
        let now = Timestamp::now();
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = DecisionId::new(format!("d-{}", store.next_id))?;

        let mut decision = Decision::new(id, self.user_id.clone(), new.category_id.clone(), &new.title, now)?
            .with_notes(new.notes.clone())
            .with_tags(new.tags.clone())
            .with_confidence(new.confidence)
            .with_meta(new.meta.clone());
        decision.set_result(new.result, now);

        store.decisions.push(decision.clone());
        Ok(decision)
    }

    async fn list_decisions(&self) -> Result<Vec<Decision>, ApiError> {
        Ok(self.snapshot().await)
    }

    async fn get_decision(&self, id: &DecisionId) -> Result<Decision, ApiError> {
        let store = self.store.read().await;
        let index = store.position(id)?;
        Ok(store.decisions[index].clone())
    }

    async fn update_decision(&self, id: &DecisionId, patch: &DecisionPatch) -> Result<Decision, ApiError> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;

        // Validate against a copy so a rejected patch leaves the record untouched.
        let mut updated = store.decisions[index].clone();
        updated
            .apply_patch(patch, Timestamp::now())
            .map_err(bad_request)?;

        store.decisions[index] = updated.clone();
        Ok(updated)
    }

    async fn delete_decision(&self, id: &DecisionId) -> Result<DeleteAck, ApiError> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;
        store.decisions.remove(index);
        Ok(DeleteAck::for_id(id))
    }

    async fn get_analysis(&self) -> Result<StatsOverview, ApiError> {
        let decisions = self.snapshot().await;
        Ok(StatsOverview::from_decisions(&decisions, self.tag_limit))
    }

    async fn get_summary(&self, query: &SummaryQuery) -> Result<AnalysisSummary, ApiError> {
        let decisions = self.snapshot().await;
        Ok(AnalysisSummary::from_decisions(
            &decisions,
            query,
            Timestamp::now(),
            self.tag_limit,
        ))
    }

    async fn get_pending(&self) -> Result<Vec<Decision>, ApiError> {
        let decisions = self.snapshot().await;
        Ok(pending_decisions(&decisions).into_iter().cloned().collect())
    }

    async fn get_weekly_report(&self, week_start: NaiveDate) -> Result<WeeklyReport, ApiError> {
        let decisions = self.snapshot().await;
        let week = WeekRange::starting(week_start, &self.offset).map_err(bad_request)?;
        WeeklyReport::from_decisions(&decisions, &week, &self.offset).map_err(bad_request)
    }
}

/// A request the service would refuse with 400.
fn bad_request(err: ValidationError) -> ApiError {
    ApiError::Status {
        status: 400,
        body: err.to_string(),
    }
}
