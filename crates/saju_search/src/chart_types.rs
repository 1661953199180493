//! Output types for the natal chart.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use saju_base::daeun::DaeunHeader;
use saju_base::{Branch, DomainBuckets, Ganji, Gender, LifeStage, Stem, TenGod};
use serde::{Serialize, Serializer};

/// Note attached to an unobserved hour pillar.
pub const NO_ESTIMATION_NOTE: &str = "No estimation applied";

/// Label used for the day stem in place of a ten-god.
pub const DAY_MASTER_LABEL: &str = "일간";

/// Ten-god slot of a pillar stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemRole {
    /// The day stem itself.
    DayMaster,
    Classified(TenGod),
    /// The table has no entry for the pair.
    Unclassified,
}

impl StemRole {
    /// From a table lookup result.
    pub fn from_lookup(god: Option<TenGod>) -> Self {
        god.map_or(Self::Unclassified, Self::Classified)
    }

    /// The category, if any.
    pub fn ten_god(self) -> Option<TenGod> {
        match self {
            Self::Classified(g) => Some(g),
            _ => None,
        }
    }
}

impl Serialize for StemRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::DayMaster => serializer.serialize_str(DAY_MASTER_LABEL),
            Self::Classified(g) => g.serialize(serializer),
            Self::Unclassified => serializer.serialize_none(),
        }
    }
}

/// A pillar whose stem and branch are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObservedPillar {
    pub stem: Stem,
    pub branch: Branch,
    pub ten_god: StemRole,
    /// Own stem at own branch.
    pub life_stage: Option<LifeStage>,
}

impl ObservedPillar {
    pub fn ganji(&self) -> Ganji {
        Ganji::new(self.stem, self.branch)
    }
}

/// A pillar slot; the hour may be unobserved and then carries nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "observability", rename_all = "lowercase")]
pub enum Pillar {
    Observed(ObservedPillar),
    Unobserved,
}

impl Pillar {
    pub fn observed(&self) -> Option<&ObservedPillar> {
        match self {
            Self::Observed(p) => Some(p),
            Self::Unobserved => None,
        }
    }

    pub fn is_observed(&self) -> bool {
        matches!(self, Self::Observed(_))
    }

    pub fn ganji(&self) -> Option<Ganji> {
        self.observed().map(ObservedPillar::ganji)
    }
}

fn serialize_observed<S: Serializer>(p: &ObservedPillar, s: S) -> Result<S::Ok, S::Error> {
    Pillar::Observed(*p).serialize(s)
}

/// The four natal pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillars {
    #[serde(serialize_with = "serialize_observed")]
    pub year: ObservedPillar,
    #[serde(serialize_with = "serialize_observed")]
    pub month: ObservedPillar,
    #[serde(serialize_with = "serialize_observed")]
    pub day: ObservedPillar,
    pub hour: Pillar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Observability {
    Observed,
    Unobserved,
}

/// Declared state of the hour pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourState {
    pub observability: Observability,
    /// 1.0 when observed, 0.0 otherwise.
    pub confidence: f64,
    pub note: Option<&'static str>,
}

impl HourState {
    pub fn for_pillar(hour: &Pillar) -> Self {
        if hour.is_observed() {
            Self {
                observability: Observability::Observed,
                confidence: 1.0,
                note: None,
            }
        } else {
            Self {
                observability: Observability::Unobserved,
                confidence: 0.0,
                note: Some(NO_ESTIMATION_NOTE),
            }
        }
    }
}

/// One classified destiny-cycle period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaeunEntry {
    pub index: u8,
    pub stem: Stem,
    pub branch: Branch,
    pub ganji: Ganji,
    /// Entry stem against the day stem.
    pub ten_god: Option<TenGod>,
    /// Entry stem at entry branch.
    pub life_stage: Option<LifeStage>,
    pub label_age: i32,
    pub start_year: i32,
    pub label: String,
}

/// Destiny-cycle header and its classified entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaeunSummary {
    pub header: DaeunHeader,
    pub entries: Vec<DaeunEntry>,
}

/// Which stem a flow row looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowSource {
    NatalMonth,
    NatalYear,
    NatalHour,
    ReferenceYear,
}

/// A stem of the chart read against the reference year's branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowRow {
    pub source: FlowSource,
    /// `None` for the hour row of an unobserved hour.
    pub stem: Option<Stem>,
    pub ten_god: Option<TenGod>,
    pub life_stage: Option<LifeStage>,
}

/// Flow rows and domain buckets for the reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOutlook {
    pub year: i32,
    pub ganji: Ganji,
    pub flow: Vec<FlowRow>,
    pub buckets: DomainBuckets,
}

/// The assembled natal chart; built once per query and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    /// Instant the destiny cycle was measured from.
    pub instant: NaiveDateTime,
    pub gender: Gender,
    pub day_stem: Stem,
    pub pillars: Pillars,
    pub hour_state: HourState,
    pub daeun: DaeunSummary,
    pub outlook: YearOutlook,
}
