//! GetDecisionInsightHandler - a decision with its labels and track record.
//!
//! Loads the decision and the full list, then compares locally.

use std::sync::Arc;

use serde::Serialize;

use crate::application::handlers::JournalError;
use crate::domain::analysis::DecisionInsight;
use crate::domain::foundation::DecisionId;
use crate::domain::journal::{CategoryRegistry, Decision};
use crate::ports::DecisionApi;

#[derive(Debug, Clone)]
pub struct GetDecisionInsightQuery {
    pub decision_id: DecisionId,
}

/// What the decision detail screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionDetail {
    pub decision: Decision,
    pub category_name: String,
    pub result_label: String,
    pub insight: DecisionInsight,
}

pub struct GetDecisionInsightHandler {
    api: Arc<dyn DecisionApi>,
    registry: &'static CategoryRegistry,
}

impl GetDecisionInsightHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self {
            api,
            registry: CategoryRegistry::builtin(),
        }
    }

    pub async fn handle(&self, query: GetDecisionInsightQuery) -> Result<DecisionDetail, JournalError> {
        let decision = self
            .api
            .get_decision(&query.decision_id)
            .await
            .map_err(|e| JournalError::for_decision(e, &query.decision_id))?;
        let all = self.api.list_decisions().await?;

        let category = decision.category_id().as_str();
        Ok(DecisionDetail {
            category_name: self.registry.display_name(category).to_string(),
            result_label: self.registry.result_label(category, decision.result()).to_string(),
            insight: DecisionInsight::for_decision(&decision, &all),
            decision,
        })
    }
}
