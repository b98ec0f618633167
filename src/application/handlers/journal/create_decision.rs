//! CreateDecisionHandler - logs a new decision.
//!
//! New decisions are always pending; the outcome is recorded later.

use std::sync::Arc;

use thiserror::Error;

use crate::application::UserNotice;
use crate::domain::foundation::ValidationError;
use crate::domain::journal::{Decision, DecisionDraft};
use crate::ports::{ApiError, DecisionApi};

/// Command to create a decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub draft: DecisionDraft,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreateDecisionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<&CreateDecisionError> for UserNotice {
    fn from(err: &CreateDecisionError) -> Self {
        match err {
            CreateDecisionError::Validation(v) => UserNotice::from(v),
            CreateDecisionError::Api(api) => UserNotice::from(api),
        }
    }
}

/// Handler for creating decisions.
pub struct CreateDecisionHandler {
    api: Arc<dyn DecisionApi>,
}

impl CreateDecisionHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<Decision, CreateDecisionError> {
        let new = cmd.draft.validate()?;
        let created = self.api.create_decision(&new).await?;

        tracing::info!(
            decision_id = %created.id(),
            category = %created.category_id(),
            "Decision created"
        );
        Ok(created)
    }
}
