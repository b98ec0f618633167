//! Errors shared by handlers that address a single decision.

use thiserror::Error;

use crate::application::UserNotice;
use crate::domain::foundation::DecisionId;
use crate::ports::ApiError;

/// Failure looking up or changing an existing decision.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JournalError {
    #[error("Decision not found: {0}")]
    NotFound(DecisionId),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl JournalError {
    /// Maps a 404 for `id` to `NotFound`, anything else to `Api`.
    pub fn for_decision(err: ApiError, id: &DecisionId) -> Self {
        if err.is_not_found() {
            JournalError::NotFound(id.clone())
        } else {
            JournalError::Api(err)
        }
    }
}

impl From<&JournalError> for UserNotice {
    fn from(err: &JournalError) -> Self {
        match err {
            JournalError::NotFound(id) => {
                UserNotice::not_found("That decision no longer exists.").with_detail(id.to_string())
            }
            JournalError::Api(api) => UserNotice::from(api),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NoticeKind;

    #[test]
    fn not_found_status_becomes_not_found() {
        let id = DecisionId::new("d-1").unwrap();
        let err = JournalError::for_decision(ApiError::not_found(&id), &id);
        assert_eq!(err, JournalError::NotFound(id));
        assert_eq!(UserNotice::from(&err).kind, NoticeKind::NotFound);
    }

    #[test]
    fn other_statuses_stay_api_errors() {
        let id = DecisionId::new("d-1").unwrap();
        let api = ApiError::Status {
            status: 503,
            body: "down".to_string(),
        };
        let err = JournalError::for_decision(api.clone(), &id);
        assert_eq!(err, JournalError::Api(api));
        assert_eq!(UserNotice::from(&err).kind, NoticeKind::Error);
    }
}
