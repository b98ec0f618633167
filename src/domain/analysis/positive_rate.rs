//! Positive rate and result counts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::journal::{CategoryId, Decision, DecisionResult};

/// Share of completed decisions that turned out positive.
///
/// Pending decisions are excluded from both numerator and denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveRate {
    pub positive: usize,
    pub completed: usize,
}

impl PositiveRate {
    pub fn from_decisions<'a>(decisions: impl IntoIterator<Item = &'a Decision>) -> Self {
        decisions
            .into_iter()
            .fold(Self::default(), |mut acc, d| {
                match d.result() {
                    DecisionResult::Pending => {}
                    DecisionResult::Positive => {
                        acc.positive += 1;
                        acc.completed += 1;
                    }
                    DecisionResult::Negative | DecisionResult::Neutral => acc.completed += 1,
                }
                acc
            })
    }

    /// `positive / completed`, or 0 when nothing is completed.
    pub fn ratio(&self) -> f64 {
        if self.completed == 0 {
            return 0.0;
        }
        self.positive as f64 / self.completed as f64
    }

    pub fn percent(&self) -> Percentage {
        Percentage::of(self.positive, self.completed)
    }
}

/// Positive rate over a list of decisions.
pub fn positive_rate(decisions: &[Decision]) -> PositiveRate {
    PositiveRate::from_decisions(decisions)
}

/// Positive rate among decisions in the same category as `target`.
pub fn category_comparison(target: &Decision, decisions: &[Decision]) -> PositiveRate {
    category_rate(target.category_id(), decisions)
}

/// Positive rate among decisions of one category.
pub fn category_rate(category_id: &CategoryId, decisions: &[Decision]) -> PositiveRate {
    PositiveRate::from_decisions(decisions.iter().filter(|d| d.category_id() == category_id))
}

/// Per-result tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCounts {
    pub total: usize,
    pub pending: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl ResultCounts {
    pub fn from_decisions<'a>(decisions: impl IntoIterator<Item = &'a Decision>) -> Self {
        let mut counts = Self::default();
        for d in decisions {
            counts.record(d.result());
        }
        counts
    }

    pub fn record(&mut self, result: DecisionResult) {
        self.total += 1;
        match result {
            DecisionResult::Pending => self.pending += 1,
            DecisionResult::Positive => self.positive += 1,
            DecisionResult::Negative => self.negative += 1,
            DecisionResult::Neutral => self.neutral += 1,
        }
    }

    pub fn completed(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn count(&self, result: DecisionResult) -> usize {
        match result {
            DecisionResult::Pending => self.pending,
            DecisionResult::Positive => self.positive,
            DecisionResult::Negative => self.negative,
            DecisionResult::Neutral => self.neutral,
        }
    }

    /// Share of completed decisions with this result. Pending yields 0.
    pub fn rate(&self, result: DecisionResult) -> Percentage {
        if result.is_pending() {
            return Percentage::ZERO;
        }
        Percentage::of(self.count(result), self.completed())
    }

    pub fn positive_rate(&self) -> PositiveRate {
        PositiveRate {
            positive: self.positive,
            completed: self.completed(),
        }
    }
}

/// Pending decisions, oldest first.
pub fn pending_decisions(decisions: &[Decision]) -> Vec<&Decision> {
    let mut pending: Vec<&Decision> = decisions.iter().filter(|d| d.is_pending()).collect();
    pending.sort_by_key(|d| d.created_at());
    pending
}
