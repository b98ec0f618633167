//! DecisionResult enum for the outcome of a logged decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Outcome of a decision. `Pending` until the author records how it went.
///
/// Transitions are unrestricted: any result may move to any other,
/// including back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecisionResult {
    #[default]
    Pending,
    Positive,
    Negative,
    Neutral,
}

impl DecisionResult {
    /// The three results an outcome submission may select.
    pub const TERMINAL: [DecisionResult; 3] = [
        DecisionResult::Positive,
        DecisionResult::Negative,
        DecisionResult::Neutral,
    ];

    /// Returns true while no outcome has been recorded.
    pub fn is_pending(&self) -> bool {
        matches!(self, DecisionResult::Pending)
    }

    /// Returns true for positive, negative, and neutral.
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionResult::Pending => "pending",
            DecisionResult::Positive => "positive",
            DecisionResult::Negative => "negative",
            DecisionResult::Neutral => "neutral",
        }
    }
}

impl fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DecisionResult {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(DecisionResult::Pending),
            "positive" => Ok(DecisionResult::Positive),
            "negative" => Ok(DecisionResult::Negative),
            "neutral" => Ok(DecisionResult::Neutral),
            other => Err(ValidationError::invalid_format(
                "result",
                format!("unknown value '{}'", other),
            )),
        }
    }
}
