//! ListDecisionsHandler and ListPendingHandler - Query handlers for lists.

use std::sync::Arc;

use crate::domain::journal::{CategoryId, Decision, DecisionResult};
use crate::ports::{ApiError, DecisionApi};

/// Optional filters applied to the fetched list.
#[derive(Debug, Clone, Default)]
pub struct ListDecisionsQuery {
    pub category_id: Option<CategoryId>,
    pub result: Option<DecisionResult>,
}

impl ListDecisionsQuery {
    fn matches(&self, decision: &Decision) -> bool {
        self.category_id
            .as_ref()
            .map_or(true, |c| decision.category_id() == c)
            && self.result.map_or(true, |r| decision.result() == r)
    }
}

pub struct ListDecisionsHandler {
    api: Arc<dyn DecisionApi>,
}

impl ListDecisionsHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    /// Matching decisions, newest first.
    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<Decision>, ApiError> {
        let mut decisions: Vec<Decision> = self
            .api
            .list_decisions()
            .await?
            .into_iter()
            .filter(|d| query.matches(d))
            .collect();
        decisions.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(decisions)
    }
}

/// Decisions still waiting for an outcome, in the order the service returns.
pub struct ListPendingHandler {
    api: Arc<dyn DecisionApi>,
}

impl ListPendingHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self) -> Result<Vec<Decision>, ApiError> {
        let pending = self.api.get_pending().await?;
        tracing::debug!(count = pending.len(), "Loaded pending decisions");
        Ok(pending)
    }
}
