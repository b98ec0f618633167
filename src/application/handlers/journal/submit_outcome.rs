//! SubmitOutcomeHandler and RevertOutcomeHandler - recording results.
//!
//! A rejected form is reported back without any request being sent. A
//! revert is a plain update to pending; results move freely in both
//! directions.

use std::sync::Arc;

use thiserror::Error;

use crate::application::handlers::JournalError;
use crate::application::UserNotice;
use crate::domain::foundation::{Confidence, DecisionId};
use crate::domain::journal::Decision;
use crate::domain::outcome::{OutcomeForm, OutcomeRejection, OutcomeSubmission};
use crate::ports::DecisionApi;

/// Command to record how a decision turned out.
#[derive(Debug, Clone)]
pub struct SubmitOutcomeCommand {
    /// The decision as currently displayed.
    pub decision: Decision,
    pub form: OutcomeForm,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitOutcomeError {
    #[error(transparent)]
    Rejected(#[from] OutcomeRejection),

    #[error(transparent)]
    Journal(#[from] JournalError),
}

impl From<&SubmitOutcomeError> for UserNotice {
    fn from(err: &SubmitOutcomeError) -> Self {
        match err {
            SubmitOutcomeError::Rejected(r) => UserNotice::from(r),
            SubmitOutcomeError::Journal(j) => UserNotice::from(j),
        }
    }
}

pub struct SubmitOutcomeHandler {
    api: Arc<dyn DecisionApi>,
}

impl SubmitOutcomeHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: SubmitOutcomeCommand) -> Result<Decision, SubmitOutcomeError> {
        let submission = cmd.form.validate(&cmd.decision).map_err(|rejection| {
            tracing::debug!(
                decision_id = %cmd.decision.id(),
                field = rejection.field(),
                "Outcome form rejected"
            );
            rejection
        })?;

        let result = submission.result;
        let updated = send(self.api.as_ref(), cmd.decision.id(), submission).await?;

        tracing::info!(decision_id = %updated.id(), result = %result, "Outcome recorded");
        Ok(updated)
    }
}

/// Command to put a resolved decision back to pending.
#[derive(Debug, Clone)]
pub struct RevertOutcomeCommand {
    pub decision_id: DecisionId,
    pub confidence: Confidence,
}

pub struct RevertOutcomeHandler {
    api: Arc<dyn DecisionApi>,
}

impl RevertOutcomeHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: RevertOutcomeCommand) -> Result<Decision, JournalError> {
        let submission = OutcomeSubmission::revert_to_pending(cmd.confidence);
        let updated = send(self.api.as_ref(), &cmd.decision_id, submission).await?;

        tracing::info!(decision_id = %updated.id(), "Outcome reverted to pending");
        Ok(updated)
    }
}

async fn send(
    api: &dyn DecisionApi,
    id: &DecisionId,
    submission: OutcomeSubmission,
) -> Result<Decision, JournalError> {
    api.update_decision(id, &submission.into_patch())
        .await
        .map_err(|e| JournalError::for_decision(e, id))
}
