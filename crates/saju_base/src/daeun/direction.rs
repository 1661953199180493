//! Stepping direction from year-stem polarity and gender.

use tracing::debug;

use super::types::Direction;
use crate::gender::Gender;
use crate::stem::Stem;

/// Forward for yang-year men and yin-year women, backward otherwise.
pub fn daeun_direction(year_stem: Stem, gender: Gender) -> Direction {
    let forward = matches!(
        (gender, year_stem.is_yang()),
        (Gender::Male, true) | (Gender::Female, false)
    );
    let direction = if forward {
        Direction::Forward
    } else {
        Direction::Backward
    };
    debug!(%year_stem, %gender, step = direction.step(), "daeun direction");
    direction
}
