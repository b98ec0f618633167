//! User-facing notices.
//!
//! Every failure a screen can hit maps onto one of three notice kinds. None
//! of them is fatal: the user either retries, dismisses, or goes back to the
//! list.

use serde::Serialize;

use crate::domain::foundation::ValidationError;
use crate::domain::outcome::OutcomeRejection;
use crate::ports::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Transport or service failure.
    Error,
    /// The user's input needs correcting.
    Info,
    /// The requested decision does not exist.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeAction {
    Retry,
    Dismiss,
    BackToList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserNotice {
    pub kind: NoticeKind,
    pub message: String,
    pub action: NoticeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl UserNotice {
    /// A dismissible failure offering a manual retry.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            action: NoticeAction::Retry,
            detail: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            action: NoticeAction::Dismiss,
            detail: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::NotFound,
            message: message.into(),
            action: NoticeAction::BackToList,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.action == NoticeAction::Retry
    }
}

impl std::fmt::Display for UserNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.message, detail),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Raw service failures are always retryable errors. Only a lookup that
/// names a decision can turn a 404 into `NotFound`, through `JournalError`.
impl From<&ApiError> for UserNotice {
    fn from(err: &ApiError) -> Self {
        let message = match err {
            ApiError::Transport(_) => "Could not reach the journal service.",
            ApiError::Status { .. } => "The journal service rejected the request.",
            ApiError::Decode(_) | ApiError::InvalidData(_) => {
                "The journal service sent data this client cannot read."
            }
        };
        UserNotice::error(message).with_detail(err.to_string())
    }
}

impl From<&ValidationError> for UserNotice {
    fn from(err: &ValidationError) -> Self {
        UserNotice::info(err.to_string())
    }
}

impl From<&OutcomeRejection> for UserNotice {
    fn from(rejection: &OutcomeRejection) -> Self {
        UserNotice::info(rejection.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::JournalError;
    use crate::domain::foundation::DecisionId;

    #[test]
    fn transport_failure_is_retryable_error() {
        let notice = UserNotice::from(&ApiError::Transport("connection refused".to_string()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.is_retryable());
        assert!(notice.detail.unwrap().contains("connection refused"));
    }

    #[test]
    fn status_error_keeps_status_and_body_in_detail() {
        let notice = UserNotice::from(&ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.detail.as_deref(), Some("API returned 500: boom"));
    }

    #[test]
    fn bare_404_is_a_retryable_error() {
        let notice = UserNotice::from(&ApiError::Status {
            status: 404,
            body: "Cannot GET /api/analysis".to_string(),
        });
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.action, NoticeAction::Retry);
    }

    #[test]
    fn missing_decision_sends_user_back_to_list() {
        let id = DecisionId::new("d-1").unwrap();
        let err = JournalError::for_decision(ApiError::not_found(&id), &id);
        let notice = UserNotice::from(&err);
        assert_eq!(notice.kind, NoticeKind::NotFound);
        assert_eq!(notice.action, NoticeAction::BackToList);
    }

    #[test]
    fn outcome_rejection_is_informational() {
        let notice = UserNotice::from(&OutcomeRejection::ResultNotSelected);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.action, NoticeAction::Dismiss);
        assert!(!notice.is_retryable());
    }

    #[test]
    fn serializes_kind_and_action_in_snake_case() {
        let value = serde_json::to_value(UserNotice::not_found("gone")).unwrap();
        assert_eq!(value["kind"], "not_found");
        assert_eq!(value["action"], "back_to_list");
        assert!(value.get("detail").is_none());
    }
}
