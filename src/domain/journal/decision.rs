//! Decision record - a single logged judgment and its outcome.

use serde::Serialize;

use super::{CategoryId, DecisionMeta, DecisionPatch, DecisionResult, Tags};
use crate::domain::foundation::{Confidence, DecisionId, Timestamp, UserId, ValidationError};
use crate::domain::outcome::OutcomeSubmission;

/// A logged decision as held by the client for the current view.
///
/// Field access is read-only; changes go through [`Decision::set_result`]
/// and [`Decision::apply_patch`], which keep `resolved_at` present exactly
/// when the result is not pending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    id: DecisionId,
    user_id: UserId,
    category_id: CategoryId,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    tags: Tags,
    confidence: Confidence,
    result: DecisionResult,
    meta: DecisionMeta,
    created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_at: Option<Timestamp>,
}

impl Decision {
    /// Creates a pending decision. The title must be non-empty after trimming.
    pub fn new(
        id: DecisionId,
        user_id: UserId,
        category_id: CategoryId,
        title: impl Into<String>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = normalize_title(title.into())?;
        let meta = DecisionMeta::empty_for(&category_id);
        Ok(Self {
            id,
            user_id,
            category_id,
            title,
            notes: None,
            tags: Tags::new(),
            confidence: Confidence::default(),
            result: DecisionResult::Pending,
            meta,
            created_at,
            resolved_at: None,
        })
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = normalize_notes(notes);
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets metadata, re-shaped to this decision's category.
    pub fn with_meta(mut self, meta: DecisionMeta) -> Self {
        self.meta = meta.conform_to(&self.category_id);
        self
    }

    /// Restores a result as reported by the API.
    ///
    /// A pending result always drops `resolved_at`. A terminal result keeps
    /// whatever resolution time the server sent, which may be absent on
    /// records written by older clients.
    pub fn with_result(mut self, result: DecisionResult, resolved_at: Option<Timestamp>) -> Self {
        self.result = result;
        self.resolved_at = if result.is_pending() { None } else { resolved_at };
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn result(&self) -> DecisionResult {
        self.result
    }

    pub fn meta(&self) -> &DecisionMeta {
        &self.meta
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn resolved_at(&self) -> Option<Timestamp> {
        self.resolved_at
    }

    pub fn is_pending(&self) -> bool {
        self.result.is_pending()
    }

    /// Return rate of a resolved investing decision, in percent.
    pub fn return_rate(&self) -> Option<f64> {
        self.meta.as_invest().and_then(|m| m.return_rate)
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Moves to any result. Leaving pending stamps `resolved_at` with `now`,
    /// re-entering pending clears it, and moving between terminal results
    /// keeps the original resolution time.
    pub fn set_result(&mut self, result: DecisionResult, now: Timestamp) {
        self.resolved_at = match (result.is_pending(), self.resolved_at) {
            (true, _) => None,
            (false, Some(existing)) if !self.result.is_pending() => Some(existing),
            (false, _) => Some(now),
        };
        self.result = result;
    }

    /// Applies a validated outcome locally, the way the server would.
    pub fn apply_outcome(&mut self, submission: &OutcomeSubmission, now: Timestamp) {
        self.confidence = submission.confidence;
        if let Some(meta) = &submission.meta {
            self.meta = meta.clone().conform_to(&self.category_id);
        }
        self.set_result(submission.result, now);
    }

    /// Applies an edit or outcome update. `id`, `user_id`, and `created_at`
    /// are never touched.
    pub fn apply_patch(&mut self, patch: &DecisionPatch, now: Timestamp) -> Result<(), ValidationError> {
        if let Some(title) = &patch.title {
            self.title = normalize_title(title.clone())?;
        }
        if let Some(category_id) = &patch.category_id {
            self.category_id = category_id.clone();
            self.meta = std::mem::take(&mut self.meta).conform_to(category_id);
        }
        if let Some(notes) = &patch.notes {
            self.notes = normalize_notes(notes.clone());
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Some(confidence) = patch.confidence {
            self.confidence = confidence;
        }
        if let Some(meta) = &patch.meta {
            self.meta = meta.clone().conform_to(&self.category_id);
        }
        if let Some(result) = patch.result {
            self.set_result(result, now);
        }
        Ok(())
    }
}

fn normalize_title(title: String) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("title"));
    }
    Ok(trimmed.to_string())
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}
