//! Week-over-week review: ISO weeks, weekly snapshots, and their deltas.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{bucket_for, confidence_buckets, ConfidenceBucket, ResultCounts};
use crate::domain::foundation::{Confidence, Percentage, Timestamp, ValidationError};
use crate::domain::journal::{Decision, DecisionResult};

/// A week from Monday 00:00:00 local time up to (not including) the next
/// Monday 00:00:00, i.e. Monday through Sunday inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub start_date: NaiveDate,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl WeekRange {
    /// The week containing `instant`, as seen in `tz`.
    pub fn containing<Tz: TimeZone>(instant: Timestamp, tz: &Tz) -> Result<Self, ValidationError> {
        let local_date = instant.in_zone(tz).date_naive();
        Self::starting(local_date, tz)
    }

    /// The week containing `date`; any weekday snaps back to its Monday.
    ///
    /// Fails when the week or the week after it falls outside the
    /// representable calendar.
    pub fn starting<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<Self, ValidationError> {
        let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
        let monday = date.checked_sub_days(back).ok_or_else(|| out_of_calendar(date))?;
        let next_monday = monday
            .checked_add_days(Days::new(7))
            .ok_or_else(|| out_of_calendar(date))?;
        Ok(Self {
            start_date: monday,
            start: local_midnight(tz, monday),
            end: local_midnight(tz, next_monday),
        })
    }

    /// The immediately preceding week.
    pub fn previous<Tz: TimeZone>(&self, tz: &Tz) -> Result<Self, ValidationError> {
        let date = self
            .start_date
            .checked_sub_days(Days::new(7))
            .ok_or_else(|| out_of_calendar(self.start_date))?;
        Self::starting(date, tz)
    }

    /// Sunday of this week.
    pub fn last_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, instant: Timestamp) -> bool {
        instant >= self.start && instant < self.end
    }
}

fn out_of_calendar(date: NaiveDate) -> ValidationError {
    ValidationError::invalid_format("weekStart", format!("{} is outside the supported calendar", date))
}

/// First instant of `date` in `tz`. When a DST gap swallows midnight, the
/// day starts at the end of the gap.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Timestamp {
    let naive = date.and_time(NaiveTime::MIN);
    if let Some(local) = tz.from_local_datetime(&naive).earliest() {
        return Timestamp::from_zoned(&local);
    }
    // the gap ends at the instant where midnight would fall under the
    // offset in force before it
    let before = naive
        .checked_sub_days(Days::new(1))
        .map(|day_before| tz.offset_from_utc_datetime(&day_before).fix());
    let gap_end = before.and_then(|offset| {
        naive.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
    });
    Timestamp::from_zoned(&tz.from_utc_datetime(&gap_end.unwrap_or(naive)))
}

/// Aggregate of the decisions created during one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySnapshot {
    pub week_start: NaiveDate,
    pub counts: ResultCounts,
    pub confidence: Vec<ConfidenceBucket>,
}

impl WeeklySnapshot {
    pub fn from_decisions(decisions: &[Decision], week: &WeekRange) -> Self {
        let in_week: Vec<&Decision> = decisions
            .iter()
            .filter(|d| week.contains(d.created_at()))
            .collect();

        Self {
            week_start: week.start_date,
            counts: ResultCounts::from_decisions(in_week.iter().copied()),
            confidence: confidence_buckets(in_week.iter().copied()),
        }
    }

    /// Share of completed decisions with `result`.
    pub fn rate(&self, result: DecisionResult) -> Percentage {
        self.counts.rate(result)
    }
}

/// Signed count changes between two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountDelta {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

/// Signed percentage-point changes of each result's share.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDelta {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Change at one confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceDelta {
    pub level: Confidence,
    pub count_delta: i64,
    /// Percentage points.
    pub positive_rate_delta: f64,
}

/// Current week minus previous week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyDelta {
    pub count_delta: CountDelta,
    pub result_rate_delta: RateDelta,
    pub confidence_delta: Vec<ConfidenceDelta>,
}

impl WeeklyDelta {
    /// Differences are `current - previous`; rates differ in percentage
    /// points, not as a ratio. A confidence level present in only one week
    /// counts as zero decisions at 0% in the other.
    pub fn between(current: &WeeklySnapshot, previous: &WeeklySnapshot) -> Self {
        let (c, p) = (&current.counts, &previous.counts);
        let count_delta = CountDelta {
            total: diff(c.total, p.total),
            completed: diff(c.completed(), p.completed()),
            pending: diff(c.pending, p.pending),
            positive: diff(c.positive, p.positive),
            negative: diff(c.negative, p.negative),
            neutral: diff(c.neutral, p.neutral),
        };

        let points = |result| current.rate(result).points_since(previous.rate(result));
        let result_rate_delta = RateDelta {
            positive: points(DecisionResult::Positive),
            negative: points(DecisionResult::Negative),
            neutral: points(DecisionResult::Neutral),
        };

        let levels: BTreeSet<Confidence> = current
            .confidence
            .iter()
            .chain(previous.confidence.iter())
            .map(|b| b.level)
            .collect();

        let confidence_delta = levels
            .into_iter()
            .map(|level| {
                let now = bucket_for(&current.confidence, level);
                let before = bucket_for(&previous.confidence, level);
                let total = |b: Option<&ConfidenceBucket>| b.map(|b| b.total).unwrap_or(0);
                let rate = |b: Option<&ConfidenceBucket>| {
                    b.map(|b| b.percent()).unwrap_or(Percentage::ZERO)
                };
                ConfidenceDelta {
                    level,
                    count_delta: diff(total(now), total(before)),
                    positive_rate_delta: rate(now).points_since(rate(before)),
                }
            })
            .collect();

        Self {
            count_delta,
            result_rate_delta,
            confidence_delta,
        }
    }
}

fn diff(current: usize, previous: usize) -> i64 {
    current as i64 - previous as i64
}

/// Two consecutive weekly snapshots, as served by the weekly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub week_start: NaiveDate,
    pub current: WeeklySnapshot,
    pub previous: WeeklySnapshot,
}

impl WeeklyReport {
    /// Builds the report for `week` and the week before it.
    pub fn from_decisions<Tz: TimeZone>(
        decisions: &[Decision],
        week: &WeekRange,
        tz: &Tz,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            week_start: week.start_date,
            current: WeeklySnapshot::from_decisions(decisions, week),
            previous: WeeklySnapshot::from_decisions(decisions, &week.previous(tz)?),
        })
    }

    pub fn delta(&self) -> WeeklyDelta {
        WeeklyDelta::between(&self.current, &self.previous)
    }
}
