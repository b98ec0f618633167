//! GetDecisionHandler - Query handler for one decision.

use std::sync::Arc;

use crate::application::handlers::JournalError;
use crate::domain::foundation::DecisionId;
use crate::domain::journal::Decision;
use crate::ports::DecisionApi;

#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub decision_id: DecisionId,
}

pub struct GetDecisionHandler {
    api: Arc<dyn DecisionApi>,
}

impl GetDecisionHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<Decision, JournalError> {
        self.api
            .get_decision(&query.decision_id)
            .await
            .map_err(|e| JournalError::for_decision(e, &query.decision_id))
    }
}
