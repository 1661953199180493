//! Daeun (대운): decade-scale destiny cycle.
//!
//! Direction comes from year-stem polarity and gender. The start age comes
//! from the distance between birth and the nearest solar term in that
//! direction. Ten periods step from the month pillar.
//!
//! When the birth year has no term list, or no term qualifies, the cycle
//! degrades to a fixed start age of 8 with the start at birth. This is
//! flagged on the header and is not an error.

pub mod balance;
pub mod direction;
pub mod label;
pub mod sequence;
pub mod types;

pub use balance::{
    find_boundary, fractional_start_age, offset_by_years, round_start_age, start_instants,
    traditional_start_year,
};
pub use direction::daeun_direction;
pub use label::{daeun_periods, format_label, label_age};
pub use sequence::daeun_sequence;
pub use types::{
    DAEUN_COUNT, DAYS_PER_YEAR, DaeunCycle, DaeunHeader, DaeunPeriod, Direction, FALLBACK_AGE,
    FALLBACK_YEAR_OFFSET, MAX_START_AGE, MIN_START_AGE, MINUTES_PER_YEAR_OF_AGE, YEARS_PER_DAEUN,
};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::ganji::Ganji;
use crate::gender::Gender;
use crate::stem::Stem;

/// Compute the full cycle for a birth instant.
///
/// `terms` is the solar-term list for the birth year, in any order, or
/// `None` when the year is not covered.
pub fn daeun_for_birth(
    year_stem: Stem,
    gender: Gender,
    birth: NaiveDateTime,
    month: Ganji,
    terms: Option<&[NaiveDateTime]>,
) -> DaeunCycle {
    let direction = daeun_direction(year_stem, gender);
    let year = balance::birth_year(birth);

    let measured = terms
        .and_then(|t| find_boundary(birth, t, direction))
        .and_then(|boundary| {
            let age = fractional_start_age(birth, boundary, direction);
            let (start, decades) = start_instants(birth, age)?;
            Some((boundary, age, start, decades))
        });

    let header = match measured {
        Some((boundary, age, start, decade_starts)) => {
            let rounded = round_start_age(age);
            debug!(%boundary, age, rounded, "daeun start age");
            DaeunHeader {
                direction,
                fractional_start_age: age,
                rounded_start_age: rounded,
                traditional_start_year: traditional_start_year(year, rounded),
                boundary: Some(boundary),
                start,
                decade_starts,
                fallback: false,
            }
        }
        None => {
            warn!(%birth, year, "no solar-term boundary; using fallback start age");
            DaeunHeader {
                direction,
                fractional_start_age: FALLBACK_AGE,
                rounded_start_age: round_start_age(FALLBACK_AGE),
                traditional_start_year: year + FALLBACK_YEAR_OFFSET,
                boundary: None,
                start: birth,
                decade_starts: Vec::new(),
                fallback: true,
            }
        }
    };

    let sequence = daeun_sequence(month, direction, DAEUN_COUNT);
    let periods = daeun_periods(&sequence, header.rounded_start_age, year);
    DaeunCycle { header, periods }
}
