//! Start age of the cycle from the distance to the nearest solar term.
//!
//! - Forward: earliest term strictly after birth.
//! - Backward: latest term at or before birth.
//!
//! Every 4320 minutes of distance count as one year of age.

use chrono::{Datelike, Duration, NaiveDateTime};

use super::types::{
    DAEUN_COUNT, DAYS_PER_YEAR, Direction, MAX_START_AGE, MIN_START_AGE, MINUTES_PER_YEAR_OF_AGE,
    YEARS_PER_DAEUN,
};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;
const MICROS_PER_MINUTE: f64 = 60_000_000.0;

/// Boundary term for `birth` in `direction`, from an unordered term list.
pub fn find_boundary(
    birth: NaiveDateTime,
    terms: &[NaiveDateTime],
    direction: Direction,
) -> Option<NaiveDateTime> {
    let mut sorted = terms.to_vec();
    sorted.sort_unstable();
    match direction {
        Direction::Forward => sorted.into_iter().find(|t| *t > birth),
        Direction::Backward => sorted.into_iter().rev().find(|t| *t <= birth),
    }
}

/// Fractional start age: minutes between birth and boundary over 4320.
pub fn fractional_start_age(
    birth: NaiveDateTime,
    boundary: NaiveDateTime,
    direction: Direction,
) -> f64 {
    let delta = match direction {
        Direction::Forward => boundary - birth,
        Direction::Backward => birth - boundary,
    };
    let minutes = delta
        .num_microseconds()
        .map_or(delta.num_seconds() as f64 / 60.0, |us| us as f64 / MICROS_PER_MINUTE);
    minutes / MINUTES_PER_YEAR_OF_AGE
}

/// Round half-to-even and clamp to [1, 10].
pub fn round_start_age(fractional: f64) -> i32 {
    if fractional.is_nan() {
        return MIN_START_AGE;
    }
    let rounded = fractional.round_ties_even();
    rounded.clamp(MIN_START_AGE as f64, MAX_START_AGE as f64) as i32
}

/// Traditional start year: birth + 1 at age 1, else birth + age - 1.
pub fn traditional_start_year(birth_year: i32, rounded_age: i32) -> i32 {
    if rounded_age == 1 {
        birth_year + 1
    } else {
        birth_year + rounded_age - 1
    }
}

/// `instant` shifted by `years` of 365.25 days, to the microsecond.
pub fn offset_by_years(instant: NaiveDateTime, years: f64) -> Option<NaiveDateTime> {
    let micros = (years * DAYS_PER_YEAR * MICROS_PER_DAY).round();
    if !micros.is_finite() || micros.abs() > i64::MAX as f64 {
        return None;
    }
    instant.checked_add_signed(Duration::microseconds(micros as i64))
}

/// Start instant and the ten decade start instants.
pub fn start_instants(
    birth: NaiveDateTime,
    fractional_age: f64,
) -> Option<(NaiveDateTime, Vec<NaiveDateTime>)> {
    let start = offset_by_years(birth, fractional_age)?;
    let decades = (0..DAEUN_COUNT)
        .map(|i| offset_by_years(start, (YEARS_PER_DAEUN as usize * i) as f64))
        .collect::<Option<Vec<_>>>()?;
    Some((start, decades))
}

/// Calendar year of a birth instant.
pub fn birth_year(birth: NaiveDateTime) -> i32 {
    birth.year()
}
