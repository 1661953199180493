//! Fortune projections for an arbitrary reference date against a fixed day stem.
//!
//! - Day: the date's day pillar.
//! - Month: the month pillar in force on the date and its span.
//! - Year: month-pillar windows from 1 January through the following
//!   February, up to 13 of them.

use chrono::{Days, NaiveDate};
use saju_base::{Gender, Stem, domain_buckets};
use tracing::debug;

use crate::engine::SajuEngine;
use crate::error::SearchError;
use crate::projection_types::{DayFortune, MonthFortune, MonthWindow};

/// Maximum number of windows in a yearly listing.
pub const MONTH_WINDOW_LIMIT: usize = 13;

/// Day pillar of `date` with its domain buckets.
pub fn day_fortune(
    engine: &SajuEngine,
    day_stem: Stem,
    gender: Gender,
    date: NaiveDate,
) -> Result<DayFortune, SearchError> {
    let ganji = engine.calendar().day(date)?.day;
    Ok(DayFortune {
        date,
        ganji,
        ten_god: engine.ten_god(day_stem, ganji.stem),
        life_stage: engine.life_stage(ganji.stem, ganji.branch),
        buckets: domain_buckets(
            day_stem,
            ganji.branch,
            gender,
            engine.ten_gods(),
            engine.life_stages(),
        ),
    })
}

/// Month pillar in force on `date`, its span and domain buckets.
pub fn month_fortune(
    engine: &SajuEngine,
    day_stem: Stem,
    gender: Gender,
    date: NaiveDate,
) -> Result<MonthFortune, SearchError> {
    let ganji = engine.calendar().day(date)?.month;
    let (start_date, end_date) = engine.calendar().month_span(date)?;
    Ok(MonthFortune {
        date,
        ganji,
        ten_god: engine.ten_god(day_stem, ganji.stem),
        life_stage: engine.life_stage(ganji.stem, ganji.branch),
        start_date,
        end_date,
        buckets: domain_buckets(
            day_stem,
            ganji.branch,
            gender,
            engine.ten_gods(),
            engine.life_stages(),
        ),
    })
}

fn window_note(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "이 월운은 {start} ~ {end} 기간에 적용됩니다. \
         사주 명리는 음력도 양력도 아닌 절기력으로 흐르기 때문에, \
         새해(1월 1일)부터 입춘 전까지는 사실 지난해의 기운이 조금 더 이어집니다. \
         그래서 이 구간을 포함해 13개월 월운으로 안내합니다."
    )
}

/// Month-pillar windows for `year`.
///
/// Change points are searched in `[year-01-01, (year+1)-03-01)`. Each window
/// runs from one change point to the day before the next, so `n` change
/// points give `n - 1` windows, capped at 13. Years outside the calendar
/// give an empty list.
pub fn year_month_fortunes(
    engine: &SajuEngine,
    day_stem: Stem,
    year: i32,
) -> Result<Vec<MonthWindow>, SearchError> {
    let bad_year = || SearchError::InvalidInput(format!("year {year} out of range"));
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(bad_year)?;
    let end = year
        .checked_add(1)
        .and_then(|y| NaiveDate::from_ymd_opt(y, 3, 1))
        .ok_or_else(bad_year)?;

    let changes = engine.calendar().month_change_points(start, end);
    let limit = changes.len().saturating_sub(1).min(MONTH_WINDOW_LIMIT);
    debug!(year, change_points = changes.len(), windows = limit, "yearly month windows");

    let windows = changes
        .windows(2)
        .take(limit)
        .filter_map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            let end_date = next.date.checked_sub_days(Days::new(1))?;
            let ganji = current.month;
            Some(MonthWindow {
                ganji,
                ten_god: engine.ten_god(day_stem, ganji.stem),
                life_stage: engine.life_stage(ganji.stem, ganji.branch),
                start_date: current.date,
                end_date,
                note: window_note(current.date, end_date),
            })
        })
        .collect();
    Ok(windows)
}
