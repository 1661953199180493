//! Chart assembly: natal pillars, hour state, destiny cycle and yearly outlook.

use chrono::Timelike;
use saju_base::{Ganji, Gender, Stem, domain_buckets, hour_ganji};
use tracing::debug;

use crate::birth::{Birth, BirthInput};
use crate::chart_types::{
    Chart, FlowRow, FlowSource, HourState, ObservedPillar, Pillar, Pillars, StemRole, YearOutlook,
};
use crate::daeun::daeun_for_chart;
use crate::engine::SajuEngine;
use crate::error::SearchError;

fn classify(engine: &SajuEngine, day_stem: Stem, ganji: Ganji) -> ObservedPillar {
    ObservedPillar {
        stem: ganji.stem,
        branch: ganji.branch,
        ten_god: StemRole::from_lookup(engine.ten_god(day_stem, ganji.stem)),
        life_stage: engine.life_stage(ganji.stem, ganji.branch),
    }
}

/// Resolve and classify the four natal pillars.
///
/// The hour pillar is observed only when the birth carries a clock time.
pub fn natal_pillars(engine: &SajuEngine, birth: &Birth) -> Result<Pillars, SearchError> {
    let (year, month, day) = engine.calendar().resolve_pillars(birth.date)?;
    let day_stem = day.stem;

    let hour = match birth.time {
        Some(t) => {
            let g = hour_ganji(day_stem, t.hour(), t.minute()).ok_or_else(|| {
                SearchError::InvalidInput(format!("time {t} has no hour branch"))
            })?;
            Pillar::Observed(classify(engine, day_stem, g))
        }
        None => Pillar::Unobserved,
    };

    let mut day_pillar = classify(engine, day_stem, day);
    day_pillar.ten_god = StemRole::DayMaster;

    Ok(Pillars {
        year: classify(engine, day_stem, year),
        month: classify(engine, day_stem, month),
        day: day_pillar,
        hour,
    })
}

/// Flow rows and domain buckets for `year`.
pub fn year_outlook(
    engine: &SajuEngine,
    pillars: &Pillars,
    gender: Gender,
    year: i32,
) -> YearOutlook {
    let ganji = Ganji::for_year(year);
    let day_stem = pillars.day.stem;
    let sources = [
        (FlowSource::NatalMonth, Some(pillars.month.stem)),
        (FlowSource::NatalYear, Some(pillars.year.stem)),
        (FlowSource::NatalHour, pillars.hour.observed().map(|p| p.stem)),
        (FlowSource::ReferenceYear, Some(ganji.stem)),
    ];
    let flow = sources
        .into_iter()
        .map(|(source, stem)| FlowRow {
            source,
            stem,
            ten_god: stem.and_then(|s| engine.ten_god(day_stem, s)),
            life_stage: stem.and_then(|s| engine.life_stage(s, ganji.branch)),
        })
        .collect();
    YearOutlook {
        year,
        ganji,
        flow,
        buckets: domain_buckets(
            day_stem,
            ganji.branch,
            gender,
            engine.ten_gods(),
            engine.life_stages(),
        ),
    }
}

/// Build the full chart for one birth input.
pub fn chart_for_birth(engine: &SajuEngine, input: &BirthInput) -> Result<Chart, SearchError> {
    let birth = input.validate()?;
    let pillars = natal_pillars(engine, &birth)?;
    let day_stem = pillars.day.stem;
    let instant = birth.instant();
    debug!(
        %instant,
        day = %pillars.day.ganji(),
        hour_observed = pillars.hour.is_observed(),
        "assembling chart"
    );

    let daeun = daeun_for_chart(
        engine,
        day_stem,
        pillars.year.stem,
        pillars.month.ganji(),
        birth.gender,
        instant,
    );
    let outlook = year_outlook(engine, &pillars, birth.gender, engine.reference_year());

    Ok(Chart {
        date: birth.date,
        time: birth.time,
        instant,
        gender: birth.gender,
        day_stem,
        hour_state: HourState::for_pillar(&pillars.hour),
        pillars,
        daeun,
        outlook,
    })
}
