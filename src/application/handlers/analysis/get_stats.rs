//! GetStatsOverviewHandler and GetSummaryHandler - server-side aggregates.

use std::sync::Arc;

use crate::domain::analysis::{AnalysisSummary, StatsOverview, SummaryQuery};
use crate::ports::{ApiError, DecisionApi};

pub struct GetStatsOverviewHandler {
    api: Arc<dyn DecisionApi>,
}

impl GetStatsOverviewHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self) -> Result<StatsOverview, ApiError> {
        self.api.get_analysis().await
    }
}

/// Fills unset summary filters from display settings.
pub struct GetSummaryHandler {
    api: Arc<dyn DecisionApi>,
    default_days: Option<u32>,
    default_limit: Option<usize>,
}

impl GetSummaryHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self {
            api,
            default_days: None,
            default_limit: None,
        }
    }

    pub fn with_defaults(mut self, days: u32, limit: usize) -> Self {
        self.default_days = Some(days);
        self.default_limit = Some(limit);
        self
    }

    pub async fn handle(&self, query: SummaryQuery) -> Result<AnalysisSummary, ApiError> {
        let query = SummaryQuery {
            days: query.days.or(self.default_days),
            limit: query.limit.or(self.default_limit),
            ..query
        };
        self.api.get_summary(&query).await
    }
}
