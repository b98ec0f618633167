//! Win rate bucketed by stated confidence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PositiveRate;
use crate::domain::foundation::{Confidence, Percentage};
use crate::domain::journal::{Decision, DecisionResult};

/// Completed decisions logged at one confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBucket {
    pub level: Confidence,
    pub total: usize,
    pub positive: usize,
}

impl ConfidenceBucket {
    pub fn positive_rate(&self) -> PositiveRate {
        PositiveRate {
            positive: self.positive,
            completed: self.total,
        }
    }

    pub fn percent(&self) -> Percentage {
        self.positive_rate().percent()
    }
}

/// Partitions completed decisions by confidence.
///
/// Levels with no completed decisions are omitted rather than zero-filled.
/// Buckets come back in ascending level order, and their totals sum to the
/// number of completed decisions.
pub fn confidence_buckets<'a>(decisions: impl IntoIterator<Item = &'a Decision>) -> Vec<ConfidenceBucket> {
    let mut by_level: BTreeMap<Confidence, ConfidenceBucket> = BTreeMap::new();

    for d in decisions.into_iter().filter(|d| !d.is_pending()) {
        let bucket = by_level.entry(d.confidence()).or_insert(ConfidenceBucket {
            level: d.confidence(),
            total: 0,
            positive: 0,
        });
        bucket.total += 1;
        if d.result() == DecisionResult::Positive {
            bucket.positive += 1;
        }
    }

    by_level.into_values().collect()
}

/// Bucket for one level, if any completed decision used it.
pub fn bucket_for(buckets: &[ConfidenceBucket], level: Confidence) -> Option<&ConfidenceBucket> {
    buckets.iter().find(|b| b.level == level)
}
