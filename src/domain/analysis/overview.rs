//! Statistics overview and filtered summaries.
//!
//! These mirror what the journal API serves from `/analysis` and
//! `/analysis/summary`, and can be computed locally from a fetched list.

use serde::{Deserialize, Serialize};

use super::{
    category_rate, confidence_buckets, top_tags, ConfidenceBucket, PositiveRate, ResultCounts,
    TagCount,
};
use crate::domain::foundation::{round1, Timestamp};
use crate::domain::journal::{CategoryId, Decision};

/// Positive rate of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category_id: CategoryId,
    pub total: usize,
    pub positive_rate: PositiveRate,
}

/// Everything the statistics screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub counts: ResultCounts,
    pub positive_rate: PositiveRate,
    pub by_category: Vec<CategoryStat>,
    pub by_confidence: Vec<ConfidenceBucket>,
    pub top_tags: Vec<TagCount>,
    /// Mean return of resolved investing decisions that recorded one.
    pub average_return_rate: Option<f64>,
}

impl StatsOverview {
    pub fn from_decisions(decisions: &[Decision], tag_limit: usize) -> Self {
        let counts = ResultCounts::from_decisions(decisions);

        let mut categories: Vec<&CategoryId> = Vec::new();
        for d in decisions {
            if !categories.contains(&d.category_id()) {
                categories.push(d.category_id());
            }
        }
        let by_category = categories
            .into_iter()
            .map(|id| CategoryStat {
                category_id: id.clone(),
                total: decisions.iter().filter(|d| d.category_id() == id).count(),
                positive_rate: category_rate(id, decisions),
            })
            .collect();

        Self {
            counts,
            positive_rate: counts.positive_rate(),
            by_category,
            by_confidence: confidence_buckets(decisions),
            top_tags: top_tags(decisions, tag_limit),
            average_return_rate: average_return_rate(decisions),
        }
    }
}

/// Mean of recorded return rates on resolved decisions, one decimal place.
pub fn average_return_rate(decisions: &[Decision]) -> Option<f64> {
    let rates: Vec<f64> = decisions
        .iter()
        .filter(|d| !d.is_pending())
        .filter_map(Decision::return_rate)
        .collect();
    if rates.is_empty() {
        return None;
    }
    Some(round1(rates.iter().sum::<f64>() / rates.len() as f64))
}

/// Filter for [`AnalysisSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    /// Look-back window in days; `None` means all time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Maximum number of tags returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Aggregate over a time window and optional category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub counts: ResultCounts,
    pub positive_rate: PositiveRate,
    pub top_tags: Vec<TagCount>,
    #[serde(default)]
    pub average_return_rate: Option<f64>,
}

impl AnalysisSummary {
    /// Computes the summary as of `now`.
    pub fn from_decisions(decisions: &[Decision], query: &SummaryQuery, now: Timestamp, default_limit: usize) -> Self {
        let since = query.days.map(|d| now.minus_days(i64::from(d)));
        let selected: Vec<Decision> = decisions
            .iter()
            .filter(|d| since.map_or(true, |s| !d.created_at().is_before(&s)))
            .filter(|d| {
                query
                    .category_id
                    .as_ref()
                    .map_or(true, |c| d.category_id() == c)
            })
            .cloned()
            .collect();

        let counts = ResultCounts::from_decisions(&selected);
        Self {
            days: query.days,
            category_id: query.category_id.clone(),
            counts,
            positive_rate: counts.positive_rate(),
            top_tags: top_tags(&selected, query.limit.unwrap_or(default_limit)),
            average_return_rate: average_return_rate(&selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::test_support::{decision, decision_at, invest_resolved};
    use crate::domain::journal::DecisionResult;

    #[test]
    fn overview_groups_by_category_in_first_seen_order() {
        let decisions = vec![
            decision("study", DecisionResult::Positive, 3),
            decision("invest", DecisionResult::Negative, 3),
            decision("study", DecisionResult::Negative, 4),
            decision("study", DecisionResult::Pending, 4),
        ];
        let overview = StatsOverview::from_decisions(&decisions, 12);

        assert_eq!(overview.counts.total, 4);
        assert_eq!(overview.positive_rate, PositiveRate { positive: 1, completed: 3 });
        assert_eq!(overview.by_category.len(), 2);
        assert_eq!(overview.by_category[0].category_id.as_str(), "study");
        assert_eq!(overview.by_category[0].total, 3);
        assert_eq!(overview.by_category[0].positive_rate.completed, 2);
        assert_eq!(overview.by_confidence.len(), 2);
    }

    #[test]
    fn average_return_rate_ignores_pending_and_missing() {
        let decisions = vec![
            invest_resolved(5.6),
            invest_resolved(-2.0),
            decision("invest", DecisionResult::Pending, 3),
            decision("health", DecisionResult::Positive, 3),
        ];
        assert_eq!(average_return_rate(&decisions), Some(1.8));
        assert_eq!(average_return_rate(&decisions[2..]), None);
    }

    #[test]
    fn summary_applies_window_and_category() {
        let decisions = vec![
            decision_at("health", DecisionResult::Positive, 3, "2024-03-09T00:00:00Z"),
            decision_at("health", DecisionResult::Negative, 3, "2024-01-01T00:00:00Z"),
            decision_at("study", DecisionResult::Positive, 3, "2024-03-09T00:00:00Z"),
        ];
        let now: Timestamp = serde_json::from_str("\"2024-03-10T00:00:00Z\"").unwrap();
        let query = SummaryQuery {
            days: Some(30),
            category_id: Some(CategoryId::new("health").unwrap()),
            limit: None,
        };
        let summary = AnalysisSummary::from_decisions(&decisions, &query, now, 12);

        assert_eq!(summary.counts.total, 1);
        assert_eq!(summary.positive_rate.ratio(), 1.0);
        assert_eq!(summary.days, Some(30));
    }

    #[test]
    fn summary_without_filters_covers_everything() {
        let decisions = vec![
            decision("health", DecisionResult::Positive, 3),
            decision("study", DecisionResult::Pending, 3),
        ];
        let summary =
            AnalysisSummary::from_decisions(&decisions, &SummaryQuery::default(), Timestamp::now(), 12);
        assert_eq!(summary.counts.total, 2);
    }
}
