//! Sexagenary calendar (만세력) table: civil date → year/month/day ganji.
//!
//! Read from a CSV file with one row per civil day. Only four columns are
//! used; anything else in the file is ignored:
//! - `양력일자`: Gregorian date (`YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD` or `YYYYMMDD`,
//!   optionally followed by a time which is dropped)
//! - `歲次`: year ganji
//! - `月建`: month ganji
//! - `日辰`: day ganji

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use saju_base::Ganji;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;

/// The three date-level pillars of one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub year: Ganji,
    pub month: Ganji,
    pub day: Ganji,
}

#[derive(Debug, Deserialize)]
struct CalendarRow {
    #[serde(rename = "양력일자")]
    date: String,
    #[serde(rename = "歲次")]
    year: String,
    #[serde(rename = "月建")]
    month: String,
    #[serde(rename = "日辰")]
    day: String,
}

impl CalendarRow {
    fn into_day(self) -> Result<CalendarDay, CalendarError> {
        Ok(CalendarDay {
            date: parse_date(&self.date)?,
            year: self.year.parse()?,
            month: self.month.parse()?,
            day: self.day.parse()?,
        })
    }
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];

/// Parse a calendar date cell, ignoring any time-of-day suffix.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let s = s.trim();
    let date_part = s.split([' ', 'T']).next().unwrap_or(s);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .ok_or_else(|| CalendarError::Parse(format!("unrecognised date '{s}'")))
}

/// Whole-day ephemeris table, sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EphemerisTable {
    days: BTreeMap<NaiveDate, CalendarDay>,
}

impl EphemerisTable {
    /// Build from already-resolved days. Duplicate dates are rejected.
    pub fn from_days(days: impl IntoIterator<Item = CalendarDay>) -> Result<Self, CalendarError> {
        let mut map = BTreeMap::new();
        for day in days {
            if map.insert(day.date, day).is_some() {
                return Err(CalendarError::Parse(format!("duplicate date {}", day.date)));
            }
        }
        Ok(Self { days: map })
    }

    /// Parse CSV from any reader.
    pub fn parse_csv<R: Read>(reader: R) -> Result<Self, CalendarError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut days = Vec::new();
        for row in rdr.deserialize::<CalendarRow>() {
            days.push(row?.into_day()?);
        }
        let table = Self::from_days(days)?;
        if let Some((first, last)) = table.range() {
            debug!(days = table.len(), %first, %last, "parsed calendar table");
        }
        Ok(table)
    }

    /// Parse CSV from string content.
    pub fn parse(content: &str) -> Result<Self, CalendarError> {
        Self::parse_csv(content.as_bytes())
    }

    /// Load a CSV file from disk.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let file = std::fs::File::open(path)?;
        Self::parse_csv(std::io::BufReader::new(file))
    }

    /// Number of days in the table.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// First and last covered dates.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.days.keys().next()?;
        let last = self.days.keys().next_back()?;
        Some((*first, *last))
    }

    /// Pillars for one date; `NotFound` outside coverage.
    pub fn day(&self, date: NaiveDate) -> Result<&CalendarDay, CalendarError> {
        self.days.get(&date).ok_or(CalendarError::NotFound(date))
    }

    /// (year, month, day) ganji for a date.
    pub fn resolve_pillars(&self, date: NaiveDate) -> Result<(Ganji, Ganji, Ganji), CalendarError> {
        let d = self.day(date)?;
        Ok((d.year, d.month, d.day))
    }

    /// Days whose month ganji differs from the previous table day, within
    /// `[start, end)`. The first day of the whole table always counts.
    pub fn month_change_points(&self, start: NaiveDate, end: NaiveDate) -> Vec<&CalendarDay> {
        if start >= end {
            return Vec::new();
        }
        let mut prev = self.days.range(..start).next_back().map(|(_, d)| d.month);
        let mut out = Vec::new();
        for day in self.days.range(start..end).map(|(_, d)| d) {
            if prev != Some(day.month) {
                out.push(day);
            }
            prev = Some(day.month);
        }
        out
    }

    /// Span of the month pillar governing `date`: from the most recent change
    /// at or before `date` to the day before the next change (`None` when the
    /// table ends first).
    pub fn month_span(
        &self,
        date: NaiveDate,
    ) -> Result<(NaiveDate, Option<NaiveDate>), CalendarError> {
        let month = self.day(date)?.month;
        let start = self
            .days
            .range(..=date)
            .rev()
            .take_while(|(_, d)| d.month == month)
            .last()
            .map_or(date, |(k, _)| *k);
        let end = self
            .days
            .range(date..)
            .find(|(_, d)| d.month != month)
            .and_then(|(k, _)| k.pred_opt());
        Ok((start, end))
    }
}
