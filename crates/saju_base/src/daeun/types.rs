//! Core types and constants for the daeun (destiny cycle) calculation.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::ganji::Ganji;

/// Minutes of distance to the boundary term that count as one year of age.
pub const MINUTES_PER_YEAR_OF_AGE: f64 = 4320.0;

/// Days per year used for start instants.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Number of periods generated for a chart.
pub const DAEUN_COUNT: usize = 10;

/// Years covered by one period.
pub const YEARS_PER_DAEUN: i32 = 10;

/// Lower clamp for the rounded start age.
pub const MIN_START_AGE: i32 = 1;

/// Upper clamp for the rounded start age.
pub const MAX_START_AGE: i32 = 10;

/// Start age used when no boundary term can be found.
///
/// Degraded mode: the start instant is the birth itself, no decade start
/// points are produced and the header is flagged as a fallback. The value
/// has no derivation from term distance.
pub const FALLBACK_AGE: f64 = 8.0;

/// Traditional start-year offset used with [`FALLBACK_AGE`].
pub const FALLBACK_YEAR_OFFSET: i32 = 7;

/// Stepping direction through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed step: +1 forward, -1 backward.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.step() as i8)
    }
}

/// Direction, start age and start instants for a chart's cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaeunHeader {
    pub direction: Direction,
    /// Unrounded start age in years.
    pub fractional_start_age: f64,
    /// Start age rounded half-to-even and clamped to [1, 10].
    pub rounded_start_age: i32,
    pub traditional_start_year: i32,
    /// Solar-term instant the age was measured against.
    pub boundary: Option<NaiveDateTime>,
    /// Birth + 365.25 × fractional age days.
    pub start: NaiveDateTime,
    /// Start instant of each decade; empty in fallback.
    pub decade_starts: Vec<NaiveDateTime>,
    /// True when no boundary term was available.
    pub fallback: bool,
}

/// One generated decade period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaeunPeriod {
    /// 0-based position in the sequence.
    pub index: u8,
    pub ganji: Ganji,
    pub label_age: i32,
    /// Birth year + label age.
    pub start_year: i32,
    pub label: String,
}

/// Header plus the ordered periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaeunCycle {
    pub header: DaeunHeader,
    pub periods: Vec<DaeunPeriod>,
}
