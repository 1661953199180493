//! End-to-end chart assembly against synthetic tables.

mod common;

use common::{at, date, engine};
use saju_base::daeun::Direction;
use saju_base::{Gender, LifeStage, Stem, TenGod};
use saju_search::{
    BirthInput, FlowSource, Observability, Pillar, SearchError, StemRole, chart_for_birth,
};

#[test]
fn synthetic_calendar_matches_known_days() {
    let e = engine();
    let (y, m, d) = e.calendar().resolve_pillars(date(1990, 5, 15)).unwrap();
    assert_eq!(y.to_string(), "庚午");
    assert_eq!(m.to_string(), "辛巳");
    assert_eq!(d.to_string(), "庚辰");
    assert_eq!(
        e.calendar().day(date(1990, 5, 14)).unwrap().day.to_string(),
        "己卯"
    );
}

#[test]
fn chart_1990_05_15_male() {
    let e = engine();
    let chart = chart_for_birth(&e, &BirthInput::with_time(1990, 5, 15, 14, 30, Gender::Male))
        .unwrap();

    let p = &chart.pillars;
    assert_eq!(p.year.ganji().to_string(), "庚午");
    assert_eq!(p.month.ganji().to_string(), "辛巳");
    assert_eq!(p.day.ganji().to_string(), "庚辰");
    assert_eq!(p.hour.ganji().map(|g| g.to_string()).as_deref(), Some("癸未"));

    assert_eq!(p.year.ten_god, StemRole::Classified(TenGod::Companion));
    assert_eq!(p.month.ten_god, StemRole::Classified(TenGod::RobWealth));
    assert_eq!(p.day.ten_god, StemRole::DayMaster);
    let hour = p.hour.observed().unwrap();
    assert_eq!(hour.ten_god, StemRole::Classified(TenGod::HurtingOfficer));

    assert_eq!(p.year.life_stage, Some(LifeStage::Bath));
    assert_eq!(p.month.life_stage, Some(LifeStage::Death));
    assert_eq!(p.day.life_stage, Some(LifeStage::Nurture));
    assert_eq!(hour.life_stage, Some(LifeStage::Tomb));

    assert_eq!(chart.hour_state.observability, Observability::Observed);
    assert_eq!(chart.hour_state.confidence, 1.0);
    assert_eq!(chart.hour_state.note, None);
}

#[test]
fn daeun_1990_05_15_male() {
    let e = engine();
    let chart = chart_for_birth(&e, &BirthInput::with_time(1990, 5, 15, 14, 30, Gender::Male))
        .unwrap();
    let d = &chart.daeun;

    // 庚 is yang and the birth is male.
    assert_eq!(d.header.direction, Direction::Forward);
    assert_eq!(d.header.boundary, Some(at(1990, 5, 21, 16, 37)));
    assert_eq!(d.header.rounded_start_age, 2);
    assert_eq!(d.header.traditional_start_year, 1991);
    assert!(!d.header.fallback);

    assert_eq!(d.entries.len(), 10);
    for pair in d.entries.windows(2) {
        assert_eq!(pair[1].start_year - pair[0].start_year, 10);
    }
    let first = &d.entries[0];
    assert_eq!(first.ganji.to_string(), "壬午");
    assert_eq!(first.ten_god, Some(TenGod::EatingGod));
    // 壬 at 午 → 태
    assert_eq!(first.life_stage, Some(LifeStage::Conception));
    assert_eq!(first.label, "만 1세부터 壬午 대운 시작 (1991)");
}

#[test]
fn female_steps_backward() {
    let e = engine();
    let chart = chart_for_birth(&e, &BirthInput::with_time(1990, 5, 15, 14, 30, Gender::Female))
        .unwrap();
    let h = &chart.daeun.header;
    assert_eq!(h.direction, Direction::Backward);
    assert_eq!(h.boundary, Some(at(1990, 5, 6, 3, 35)));
    assert_eq!(h.rounded_start_age, 3);
    assert_eq!(chart.daeun.entries[0].ganji.to_string(), "庚辰");
    assert_eq!(chart.daeun.entries[0].start_year, 1992);
}

#[test]
fn unknown_hour_is_unobserved() {
    let e = engine();
    let chart = chart_for_birth(&e, &BirthInput::date_only(1990, 5, 15, Gender::Male)).unwrap();

    assert_eq!(chart.pillars.hour, Pillar::Unobserved);
    assert_eq!(chart.time, None);
    assert_eq!(chart.hour_state.observability, Observability::Unobserved);
    assert_eq!(chart.hour_state.confidence, 0.0);
    assert_eq!(chart.hour_state.note, Some("No estimation applied"));

    // measured from midnight: 9637 minutes to the next term
    assert!((chart.daeun.header.fractional_start_age - 9637.0 / 4320.0).abs() < 1e-12);

    let hour_row = chart
        .outlook
        .flow
        .iter()
        .find(|r| r.source == FlowSource::NatalHour)
        .unwrap();
    assert_eq!(hour_row.stem, None);
    assert_eq!(hour_row.ten_god, None);
    assert_eq!(hour_row.life_stage, None);

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(
        json["pillars"]["hour"],
        serde_json::json!({"observability": "unobserved"})
    );
    assert_eq!(json["pillars"]["year"]["observability"], "observed");
}

#[test]
fn partial_hour_is_invalid_input() {
    let e = engine();
    let mut input = BirthInput::date_only(1990, 5, 15, Gender::Male);
    input.hour = Some(14);
    let err = chart_for_birth(&e, &input).unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(_)));
}

#[test]
fn date_outside_calendar_is_not_found() {
    let e = engine();
    let err = chart_for_birth(&e, &BirthInput::date_only(1950, 1, 1, Gender::Male)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn uncovered_solar_term_year_falls_back() {
    let e = engine();
    let chart = chart_for_birth(&e, &BirthInput::with_time(1991, 1, 10, 9, 0, Gender::Male))
        .unwrap();
    let h = &chart.daeun.header;
    assert!(h.fallback);
    assert_eq!(h.fractional_start_age, 8.0);
    assert_eq!(h.rounded_start_age, 8);
    assert_eq!(h.traditional_start_year, 1998);
    assert_eq!(h.start, at(1991, 1, 10, 9, 0));
    assert!(h.decade_starts.is_empty());
    assert_eq!(chart.daeun.entries.len(), 10);
}

#[test]
fn outlook_for_reference_year_2026() {
    let e = engine();
    let chart = chart_for_birth(&e, &BirthInput::with_time(1990, 5, 15, 14, 30, Gender::Male))
        .unwrap();
    let o = &chart.outlook;
    assert_eq!(o.year, 2026);
    assert_eq!(o.ganji.to_string(), "丙午");

    let rows: Vec<(FlowSource, Option<Stem>, Option<TenGod>, Option<LifeStage>)> = o
        .flow
        .iter()
        .map(|r| (r.source, r.stem, r.ten_god, r.life_stage))
        .collect();
    assert_eq!(
        rows,
        vec![
            (FlowSource::NatalMonth, Some(Stem::Sin), Some(TenGod::RobWealth), Some(LifeStage::Sickness)),
            (FlowSource::NatalYear, Some(Stem::Gyeong), Some(TenGod::Companion), Some(LifeStage::Bath)),
            (FlowSource::NatalHour, Some(Stem::Gye), Some(TenGod::HurtingOfficer), Some(LifeStage::Extinction)),
            (FlowSource::ReferenceYear, Some(Stem::Byeong), Some(TenGod::SevenKillings), Some(LifeStage::Peak)),
        ]
    );

    let wealth: Vec<Stem> = o.buckets.wealth.iter().map(|m| m.stem).collect();
    assert_eq!(wealth, vec![Stem::Gap, Stem::Eul]);
    let career: Vec<Stem> = o.buckets.career.iter().map(|m| m.stem).collect();
    assert_eq!(career, vec![Stem::Byeong, Stem::Jeong, Stem::Im, Stem::Gye]);
}

#[test]
fn reference_year_override() {
    let e = engine().with_reference_year(2025).unwrap();
    let chart = chart_for_birth(&e, &BirthInput::date_only(1990, 5, 15, Gender::Female)).unwrap();
    assert_eq!(chart.outlook.ganji.to_string(), "乙巳");
}

#[test]
fn reference_year_override_is_range_checked() {
    for year in [0, 10_000, i32::MIN, i32::MAX] {
        let err = engine().with_reference_year(year).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)), "year {year}");
    }
    assert_eq!(engine().with_reference_year(9999).unwrap().reference_year(), 9999);
}

#[test]
fn charts_are_reproducible() {
    let e = engine();
    let input = BirthInput::with_time(1990, 5, 15, 14, 30, Gender::Female);
    assert_eq!(chart_for_birth(&e, &input).unwrap(), chart_for_birth(&e, &input).unwrap());
}
