//! DecisionApi port - the external journal service.
//!
//! The service owns storage and identity. The client only ever holds the
//! decisions fetched for the current view, so every operation here is a
//! request/response round trip with no local persistence.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::{AnalysisSummary, StatsOverview, SummaryQuery, WeeklyReport};
use crate::domain::foundation::{DecisionId, ValidationError};
use crate::domain::journal::{Decision, DecisionPatch, NewDecision};

/// Acknowledgement returned by a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fn default_success() -> bool {
    true
}

impl DeleteAck {
    pub fn for_id(id: &DecisionId) -> Self {
        Self {
            success: true,
            id: Some(id.to_string()),
        }
    }
}

/// Failures talking to the journal service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The JSON decoded but violates a domain rule.
    #[error("Invalid data from API: {0}")]
    InvalidData(String),
}

impl ApiError {
    pub fn not_found(id: &DecisionId) -> Self {
        ApiError::Status {
            status: 404,
            body: format!("decision {} not found", id),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidData(err.to_string())
    }
}

/// Operations offered by the journal service for the configured user.
#[async_trait]
pub trait DecisionApi: Send + Sync {
    /// Create a decision. The service assigns id, owner, and `createdAt`.
    async fn create_decision(&self, decision: &NewDecision) -> Result<Decision, ApiError>;

    /// All decisions of the user.
    async fn list_decisions(&self) -> Result<Vec<Decision>, ApiError>;

    /// One decision.
    ///
    /// # Errors
    ///
    /// - `Status { status: 404, .. }` if the id is unknown
    async fn get_decision(&self, id: &DecisionId) -> Result<Decision, ApiError>;

    /// Partial update, used both for edits and for outcome submission.
    async fn update_decision(&self, id: &DecisionId, patch: &DecisionPatch) -> Result<Decision, ApiError>;

    async fn delete_decision(&self, id: &DecisionId) -> Result<DeleteAck, ApiError>;

    /// Server-computed statistics overview.
    async fn get_analysis(&self) -> Result<StatsOverview, ApiError>;

    /// Server-computed summary over a window and optional category.
    async fn get_summary(&self, query: &SummaryQuery) -> Result<AnalysisSummary, ApiError>;

    /// Decisions still waiting for an outcome.
    async fn get_pending(&self) -> Result<Vec<Decision>, ApiError>;

    /// Snapshots of the week starting `week_start` and the week before.
    async fn get_weekly_report(&self, week_start: NaiveDate) -> Result<WeeklyReport, ApiError>;
}
