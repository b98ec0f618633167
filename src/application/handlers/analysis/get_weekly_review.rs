//! GetWeeklyReviewHandler - this week against last week.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::application::UserNotice;
use crate::domain::analysis::{WeekRange, WeeklyDelta, WeeklyReport};
use crate::domain::foundation::ValidationError;
use crate::ports::{ApiError, DecisionApi};

#[derive(Debug, Clone)]
pub struct GetWeeklyReviewQuery {
    /// Any day of the week to review; it is snapped back to Monday.
    pub day: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReview {
    pub report: WeeklyReport,
    pub delta: WeeklyDelta,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GetWeeklyReviewError {
    /// The requested day has no representable week around it.
    #[error(transparent)]
    InvalidWeek(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<&GetWeeklyReviewError> for UserNotice {
    fn from(err: &GetWeeklyReviewError) -> Self {
        match err {
            GetWeeklyReviewError::InvalidWeek(v) => UserNotice::from(v),
            GetWeeklyReviewError::Api(api) => UserNotice::from(api),
        }
    }
}

pub struct GetWeeklyReviewHandler {
    api: Arc<dyn DecisionApi>,
}

impl GetWeeklyReviewHandler {
    pub fn new(api: Arc<dyn DecisionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: GetWeeklyReviewQuery) -> Result<WeeklyReview, GetWeeklyReviewError> {
        // only the date matters here, so the zone is irrelevant
        let week = WeekRange::starting(query.day, &Utc)?;
        // the report covers the week before as well
        week.previous(&Utc)?;
        let week_start = week.start_date;
        let report = self.api.get_weekly_report(week_start).await?;
        let delta = report.delta();

        tracing::debug!(
            week_start = %week_start,
            total_delta = delta.count_delta.total,
            "Loaded weekly review"
        );
        Ok(WeeklyReview { report, delta })
    }
}
