//! Synthetic calendar and solar-term tables for integration tests.
//!
//! Day pillars follow the real 60-day count (1900-01-01 = 甲戌). Month
//! pillars change on the 6th of each month (4th in February) and the year
//! pillar changes on 4 February, which matches the real calendar closely
//! enough for 1989-1991.

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use saju_base::{Branch, Ganji, Stem};
use saju_calendar::{CalendarDay, EphemerisTable, SolarTerm, SolarTermTable};
use saju_search::SajuEngine;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, mi, 0).unwrap()
}

fn boundary_day(month: u32) -> u32 {
    if month == 2 { 4 } else { 6 }
}

pub fn synthetic_day(d: NaiveDate) -> CalendarDay {
    let past = d.day() >= boundary_day(d.month());
    let solar_year = if d.month() > 2 || (d.month() == 2 && past) {
        d.year()
    } else {
        d.year() - 1
    };
    let offset = if past {
        d.month() as i32 - 2
    } else {
        d.month() as i32 - 3
    };
    let mi = offset.rem_euclid(12);
    let year = Ganji::for_year(solar_year);
    let first_stem = (year.stem.index() % 5) as i32 * 2 + 2;
    let month = Ganji::new(
        Stem::from_index(((first_stem + mi) % 10) as u8),
        Branch::from_index(((2 + mi) % 12) as u8),
    );
    let days = (d - date(1900, 1, 1)).num_days();
    let day = Ganji::from_index60((days + 10).rem_euclid(60) as u8);
    CalendarDay {
        date: d,
        year,
        month,
        day,
    }
}

pub fn synthetic_calendar(first: NaiveDate, last: NaiveDate) -> EphemerisTable {
    EphemerisTable::from_days(first.iter_days().take_while(|d| *d <= last).map(synthetic_day))
        .unwrap()
}

/// 1990 terms: the twelve month boundaries plus the mid-month terms around May.
pub fn solar_terms_1990() -> SolarTermTable {
    let mut terms: Vec<SolarTerm> = (1..=12)
        .filter(|&m| m != 5)
        .map(|m| SolarTerm {
            name: format!("boundary-{m}"),
            instant: at(1990, m, boundary_day(m), 12, 0),
        })
        .collect();
    terms.push(SolarTerm {
        name: "입하".into(),
        instant: at(1990, 5, 6, 3, 35),
    });
    terms.push(SolarTerm {
        name: "곡우".into(),
        instant: at(1990, 4, 20, 16, 27),
    });
    terms.push(SolarTerm {
        name: "소만".into(),
        instant: at(1990, 5, 21, 16, 37),
    });
    SolarTermTable::from_years([(1990, terms)])
}

pub fn engine() -> SajuEngine {
    SajuEngine::from_tables(
        synthetic_calendar(date(1989, 12, 1), date(1991, 3, 31)),
        solar_terms_1990(),
    )
}
