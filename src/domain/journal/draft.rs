//! Write-side shapes: what the client sends to create or change a decision.

use serde::Serialize;

use super::{CategoryId, DecisionMeta, DecisionResult, Tags};
use crate::domain::foundation::{Confidence, ValidationError};

/// Unvalidated input from the "new decision" form.
#[derive(Debug, Clone, Default)]
pub struct DecisionDraft {
    pub category_id: String,
    pub title: String,
    pub notes: Option<String>,
    pub tags: Tags,
    pub confidence: Confidence,
    pub meta: Option<DecisionMeta>,
}

impl DecisionDraft {
    /// Checks the draft and produces the create request body.
    ///
    /// The result is always pending; outcomes are recorded later.
    pub fn validate(self) -> Result<NewDecision, ValidationError> {
        let category_id = CategoryId::new(self.category_id)?;
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let meta = self
            .meta
            .map(|m| m.conform_to(&category_id))
            .unwrap_or_else(|| DecisionMeta::empty_for(&category_id));

        Ok(NewDecision {
            category_id,
            title,
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            tags: self.tags,
            confidence: self.confidence,
            result: DecisionResult::Pending,
            meta,
        })
    }
}

/// Body of a create request: every decision field except id, owner, and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDecision {
    pub category_id: CategoryId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub tags: Tags,
    pub confidence: Confidence,
    pub result: DecisionResult,
    pub meta: DecisionMeta,
}

/// Partial update. `None` leaves a field unchanged; `notes: Some(None)`
/// clears the notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DecisionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<DecisionMeta>,
}

impl DecisionPatch {
    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == DecisionPatch::default()
    }

    /// Checks editable text fields before the patch is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title"));
            }
        }
        Ok(())
    }
}
