//! Informational outcome validation failures.

use thiserror::Error;

/// Why an outcome form cannot be submitted yet.
///
/// These are user-correctable: the form stays open, nothing is sent, and
/// the message is shown as an informational notice rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeRejection {
    #[error("Choose how the decision turned out")]
    ResultNotSelected,

    #[error("'{field}' is required")]
    MissingField { field: &'static str },

    #[error("'{field}' must be a number, got '{input}'")]
    InvalidNumber { field: &'static str, input: String },
}

impl OutcomeRejection {
    /// The form field to highlight, if the rejection concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            OutcomeRejection::ResultNotSelected => Some("result"),
            OutcomeRejection::MissingField { field } | OutcomeRejection::InvalidNumber { field, .. } => {
                Some(field)
            }
        }
    }
}
