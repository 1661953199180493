//! Solar-term (절기) instants keyed by year.
//!
//! JSON shape: `{"1990": [{"name": "입하", "datetime": "1990-05-06T03:35:00+09:00"}, ...]}`.
//! Offsets are dropped; the wall-clock time is kept as a naive instant.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;

/// One named solar-term instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolarTerm {
    pub name: String,
    pub instant: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
struct RawTerm {
    #[serde(default)]
    name: String,
    datetime: String,
}

/// Offset forms without seconds, which RFC 3339 parsing rejects.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp, keeping the local wall-clock time.
pub fn parse_instant(s: &str) -> Result<NaiveDateTime, CalendarError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Ok(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| CalendarError::Parse(format!("unrecognised timestamp '{s}'")))
}

/// Per-year solar-term lists, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolarTermTable {
    years: BTreeMap<i32, Vec<SolarTerm>>,
}

impl SolarTermTable {
    /// Build from per-year lists in any order.
    pub fn from_years(years: impl IntoIterator<Item = (i32, Vec<SolarTerm>)>) -> Self {
        let years = years
            .into_iter()
            .map(|(y, mut terms)| {
                terms.sort_by_key(|t| t.instant);
                (y, terms)
            })
            .collect();
        Self { years }
    }

    /// Parse the JSON year map.
    pub fn parse_json(content: &str) -> Result<Self, CalendarError> {
        let raw: BTreeMap<String, Vec<RawTerm>> = serde_json::from_str(content)?;
        let mut years = Vec::with_capacity(raw.len());
        for (key, terms) in raw {
            let year: i32 = key
                .trim()
                .parse()
                .map_err(|_| CalendarError::Parse(format!("year key '{key}'")))?;
            let terms = terms
                .into_iter()
                .map(|t| {
                    Ok(SolarTerm {
                        name: t.name,
                        instant: parse_instant(&t.datetime)?,
                    })
                })
                .collect::<Result<Vec<_>, CalendarError>>()?;
            years.push((year, terms));
        }
        let table = Self::from_years(years);
        debug!(years = table.len(), "parsed solar-term table");
        Ok(table)
    }

    /// Load a JSON file from disk.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Number of covered years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Whether no year is covered.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// First and last covered years.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.years.keys().next()?;
        let last = self.years.keys().next_back()?;
        Some((*first, *last))
    }

    /// Terms of a year in ascending order; `None` when the year is absent.
    pub fn terms_for_year(&self, year: i32) -> Option<&[SolarTerm]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    /// Instants of a year in ascending order.
    pub fn instants_for_year(&self, year: i32) -> Option<Vec<NaiveDateTime>> {
        self.terms_for_year(year)
            .map(|terms| terms.iter().map(|t| t.instant).collect())
    }
}
