//! DeleteDecisionHandler - removes a decision.

use std::sync::Arc;

use crate::application::handlers::JournalError;
use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionApi, DeleteAck};

#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub decision_id: DecisionId,
}

pub struct DeleteDecisionHandler {
    api: Arc<dyn DecisionApi>,
}

impl DeleteDecisionHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<DeleteAck, JournalError> {
        let ack = self
            .api
            .delete_decision(&cmd.decision_id)
            .await
            .map_err(|e| JournalError::for_decision(e, &cmd.decision_id))?;

        tracing::info!(decision_id = %cmd.decision_id, "Decision deleted");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockDecisionApi;

    #[tokio::test]
    async fn deletes_then_reports_not_found() {
        let api = Arc::new(MockDecisionApi::new());
        let stored = api.stored("daily", "Walk to work").await;
        let handler = DeleteDecisionHandler::new(api.clone());
        let cmd = DeleteDecisionCommand {
            decision_id: stored.id().clone(),
        };

        let ack = handler.handle(cmd.clone()).await.unwrap();
        assert!(ack.success);

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err, JournalError::NotFound(stored.id().clone()));
    }
}
