//! How one decision compares with the rest of the journal.

use serde::{Deserialize, Serialize};

use super::{bucket_for, category_comparison, confidence_buckets, positive_rate, ConfidenceBucket, PositiveRate};
use crate::domain::journal::Decision;

/// Context shown on a decision's detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInsight {
    /// Positive rate across every decision.
    pub overall: PositiveRate,
    /// Positive rate within the decision's category.
    pub category: PositiveRate,
    /// Track record at the decision's confidence level, if any completed
    /// decision used it.
    pub same_confidence: Option<ConfidenceBucket>,
}

impl DecisionInsight {
    pub fn for_decision(target: &Decision, decisions: &[Decision]) -> Self {
        let buckets = confidence_buckets(decisions);
        Self {
            overall: positive_rate(decisions),
            category: category_comparison(target, decisions),
            same_confidence: bucket_for(&buckets, target.confidence()).copied(),
        }
    }

    /// Percentage points by which the category beats the overall rate.
    pub fn category_edge(&self) -> f64 {
        self.category.percent().points_since(self.overall.percent())
    }
}
