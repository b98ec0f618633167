//! EditDecisionHandler - general edits to an existing decision.

use std::sync::Arc;

use thiserror::Error;

use crate::application::handlers::JournalError;
use crate::application::UserNotice;
use crate::domain::foundation::{DecisionId, ValidationError};
use crate::domain::journal::{Decision, DecisionPatch};
use crate::ports::{ApiError, DecisionApi};

/// Command to edit any field except id, owner, and creation time.
#[derive(Debug, Clone)]
pub struct EditDecisionCommand {
    pub decision_id: DecisionId,
    pub patch: DecisionPatch,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditDecisionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Nothing to change")]
    NothingToChange,

    #[error(transparent)]
    Journal(#[from] JournalError),
}

impl From<ApiError> for EditDecisionError {
    fn from(err: ApiError) -> Self {
        EditDecisionError::Journal(JournalError::Api(err))
    }
}

impl From<&EditDecisionError> for UserNotice {
    fn from(err: &EditDecisionError) -> Self {
        match err {
            EditDecisionError::Validation(v) => UserNotice::from(v),
            EditDecisionError::NothingToChange => UserNotice::info(err.to_string()),
            EditDecisionError::Journal(j) => UserNotice::from(j),
        }
    }
}

pub struct EditDecisionHandler {
    api: Arc<dyn DecisionApi>,
}

impl EditDecisionHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: EditDecisionCommand) -> Result<Decision, EditDecisionError> {
        if cmd.patch.is_empty() {
            return Err(EditDecisionError::NothingToChange);
        }
        cmd.patch.validate()?;

        let updated = self
            .api
            .update_decision(&cmd.decision_id, &cmd.patch)
            .await
            .map_err(|e| JournalError::for_decision(e, &cmd.decision_id))?;

        tracing::info!(decision_id = %updated.id(), "Decision edited");
        Ok(updated)
    }
}
