//! Output types for day, month and 13-month projections.

use chrono::NaiveDate;
use saju_base::{DomainBuckets, Ganji, LifeStage, TenGod};
use serde::Serialize;

/// The day pillar of a reference date, read against the natal day stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayFortune {
    pub date: NaiveDate,
    pub ganji: Ganji,
    pub ten_god: Option<TenGod>,
    /// Own stem at own branch.
    pub life_stage: Option<LifeStage>,
    pub buckets: DomainBuckets,
}

/// The month pillar governing a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthFortune {
    pub date: NaiveDate,
    pub ganji: Ganji,
    pub ten_god: Option<TenGod>,
    pub life_stage: Option<LifeStage>,
    /// Most recent month-pillar change at or before `date`.
    pub start_date: NaiveDate,
    /// Day before the next change; `None` when the calendar ends first.
    pub end_date: Option<NaiveDate>,
    pub buckets: DomainBuckets,
}

/// One month-pillar window of a 13-month listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    pub ganji: Ganji,
    pub ten_god: Option<TenGod>,
    pub life_stage: Option<LifeStage>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub note: String,
}
