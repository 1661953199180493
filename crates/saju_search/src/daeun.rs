//! Destiny-cycle orchestration: solar-term lookup plus entry classification.

use chrono::{Datelike, NaiveDateTime};
use saju_base::{Ganji, Gender, Stem, daeun_for_birth};

use crate::chart_types::{DaeunEntry, DaeunSummary};
use crate::engine::SajuEngine;

/// Compute and classify the destiny cycle for a birth instant.
///
/// Terms come from the birth year's list; a missing year takes the
/// degraded fallback flagged on the header.
pub fn daeun_for_chart(
    engine: &SajuEngine,
    day_stem: Stem,
    year_stem: Stem,
    month: Ganji,
    gender: Gender,
    birth: NaiveDateTime,
) -> DaeunSummary {
    let terms = engine.solar_terms().instants_for_year(birth.year());
    let cycle = daeun_for_birth(year_stem, gender, birth, month, terms.as_deref());
    let entries = cycle
        .periods
        .into_iter()
        .map(|p| DaeunEntry {
            index: p.index,
            stem: p.ganji.stem,
            branch: p.ganji.branch,
            ganji: p.ganji,
            ten_god: engine.ten_god(day_stem, p.ganji.stem),
            life_stage: engine.life_stage(p.ganji.stem, p.ganji.branch),
            label_age: p.label_age,
            start_year: p.start_year,
            label: p.label,
        })
        .collect();
    DaeunSummary {
        header: cycle.header,
        entries,
    }
}
