//! Analysis Module - Pure statistics over fetched decisions.
//!
//! # Components
//!
//! - `PositiveRate` / `ResultCounts` - Win rate over completed decisions
//! - `confidence_buckets` - Win rate per stated confidence level
//! - `WeekRange` / `WeeklySnapshot` / `WeeklyDelta` - Week-over-week review
//! - `calc_return_rate` - Return of an investing decision
//! - `top_tags` - Tag frequency
//! - `StatsOverview` / `AnalysisSummary` - Local mirrors of server aggregates
//! - `DecisionInsight` - One decision against the rest of the journal
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and deterministic. They take a
//! slice of decisions already held by the caller and never mutate it.

mod confidence;
mod insight;
mod overview;
mod positive_rate;
mod return_rate;
mod tag_frequency;
mod weekly;

pub use crate::domain::foundation::parse_number;
pub use confidence::{bucket_for, confidence_buckets, ConfidenceBucket};
pub use insight::DecisionInsight;
pub use overview::{average_return_rate, AnalysisSummary, CategoryStat, StatsOverview, SummaryQuery};
pub use positive_rate::{
    category_comparison, category_rate, pending_decisions, positive_rate, PositiveRate,
    ResultCounts,
};
pub use return_rate::{calc_return_rate, calc_return_rate_text};
pub use tag_frequency::{tag_frequency, top_tags, TagCount, DEFAULT_TOP_TAGS};
pub use weekly::{
    ConfidenceDelta, CountDelta, RateDelta, WeekRange, WeeklyDelta, WeeklyReport, WeeklySnapshot,
};


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::test_support::decision;
    use super::*;
    use crate::domain::journal::{Decision, DecisionResult};

    fn arb_result() -> impl Strategy<Value = DecisionResult> {
        prop_oneof![
            Just(DecisionResult::Pending),
            Just(DecisionResult::Positive),
            Just(DecisionResult::Negative),
            Just(DecisionResult::Neutral),
        ]
    }

    fn arb_decisions() -> impl Strategy<Value = Vec<Decision>> {
        prop::collection::vec((arb_result(), 1u8..=5), 0..40).prop_map(|items| {
            items
                .into_iter()
                .map(|(result, confidence)| decision("health", result, confidence))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn positive_rate_is_exact_fraction_in_unit_range(decisions in arb_decisions()) {
            let rate = positive_rate(&decisions);
            let completed = decisions.iter().filter(|d| !d.is_pending()).count();
            let positive = decisions.iter().filter(|d| d.result() == DecisionResult::Positive).count();

            prop_assert!((0.0..=1.0).contains(&rate.ratio()));
            prop_assert_eq!(rate.completed, completed);
            if completed == 0 {
                prop_assert_eq!(rate.ratio(), 0.0);
            } else {
                prop_assert_eq!(rate.ratio(), positive as f64 / completed as f64);
            }
        }

        #[test]
        fn confidence_buckets_partition_completed_decisions(decisions in arb_decisions()) {
            let buckets = confidence_buckets(&decisions);
            let completed = decisions.iter().filter(|d| !d.is_pending()).count();

            prop_assert_eq!(buckets.iter().map(|b| b.total).sum::<usize>(), completed);
            for pair in buckets.windows(2) {
                prop_assert!(pair[0].level < pair[1].level);
            }
            for b in &buckets {
                prop_assert!(b.total > 0);
                prop_assert!(b.positive <= b.total);
            }
        }

        #[test]
        fn statistics_are_deterministic(decisions in arb_decisions()) {
            let first = StatsOverview::from_decisions(&decisions, DEFAULT_TOP_TAGS);
            let second = StatsOverview::from_decisions(&decisions, DEFAULT_TOP_TAGS);
            prop_assert_eq!(first, second);
        }
    }
}
