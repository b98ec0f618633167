//! Analysis handlers - statistics, insight, and weekly review.

mod get_decision_insight;
mod get_stats;
mod get_weekly_review;

pub use get_decision_insight::{DecisionDetail, GetDecisionInsightHandler, GetDecisionInsightQuery};
pub use get_stats::{GetStatsOverviewHandler, GetSummaryHandler};
pub use get_weekly_review::{
    GetWeeklyReviewError, GetWeeklyReviewHandler, GetWeeklyReviewQuery, WeeklyReview,
};
